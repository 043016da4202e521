//! Handles the ship, planets and such

use euclid::default::{Point2D, Vector2D};

/// The most fuel a ship can hold, in percent.
pub const MAX_FUEL: f64 = 100.0;

/// A planet. Planets never move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Planet {
    pub pos: Point2D<f64>,
    pub mass: f64,
    /// Used for drawing and as the floor on the distance in the gravity calculation.
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
}

impl Planet {
    pub fn new(pos: Point2D<f64>, mass: f64, radius: f64, color: u32) -> Self {
        Self {
            pos,
            mass,
            radius,
            color,
        }
    }
}

/// The player's ship.
///
/// A heading of zero points the nose up the screen (towards -y);
/// positive angles turn it clockwise on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ship {
    pub pos: Point2D<f64>,
    pub vel: Vector2D<f64>,
    /// Heading in radians
    pub angle: f64,
    /// Kept around but nothing turns the ship automatically; the controls set the angle directly.
    pub angular_vel: f64,
    /// Velocity gained per second of forward thrust
    pub thrust: f64,
    /// Radians turned per second while a turn key is held
    pub rotation_rate: f64,
    /// Fuel spent per second of forward thrust. Zero means the tank never drains.
    pub burn_rate: f64,
    /// Between 0 and `MAX_FUEL`
    pub fuel: f64,
    /// Whether the engine fired during the last update. The renderer draws the flame off this.
    pub firing: bool,
}

impl Ship {
    pub fn new(pos: Point2D<f64>, vel: Vector2D<f64>, angle: f64) -> Self {
        Self {
            pos,
            vel,
            angle,
            angular_vel: 0.0,
            thrust: DEFAULT_THRUST,
            rotation_rate: DEFAULT_ROTATION_RATE,
            burn_rate: DEFAULT_BURN_RATE,
            fuel: MAX_FUEL,
            firing: false,
        }
    }

    /// Unit vector out of the nose.
    pub fn forward(&self) -> Vector2D<f64> {
        let a = self.angle - std::f64::consts::FRAC_PI_2;
        Vector2D::new(a.cos(), a.sin())
    }

    /// Rotate a point from the ship's own frame (nose at -y) into world space.
    pub fn to_world(&self, local: Vector2D<f64>) -> Point2D<f64> {
        let (sin, cos) = self.angle.sin_cos();
        self.pos + Vector2D::new(cos * local.x - sin * local.y, sin * local.x + cos * local.y)
    }

    /// The hull triangle in world space.
    pub fn hull(&self) -> [Point2D<f64>; 3] {
        [
            self.to_world(Vector2D::new(0.0, -10.0) * SHIP_SCALE),
            self.to_world(Vector2D::new(-7.0, 8.0) * SHIP_SCALE),
            self.to_world(Vector2D::new(7.0, 8.0) * SHIP_SCALE),
        ]
    }

    /// The exhaust flame triangle in world space.
    pub fn flame(&self) -> [Point2D<f64>; 3] {
        [
            self.to_world(Vector2D::new(0.0, 14.0) * SHIP_SCALE),
            self.to_world(Vector2D::new(-5.0, 9.0) * SHIP_SCALE),
            self.to_world(Vector2D::new(5.0, 9.0) * SHIP_SCALE),
        ]
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Heading in degrees, wrapped into [0, 360)
    pub fn heading_degrees(&self) -> f64 {
        self.angle.to_degrees().rem_euclid(360.0)
    }
}

const DEFAULT_THRUST: f64 = 120.0;
const DEFAULT_ROTATION_RATE: f64 = 2.5;
const DEFAULT_BURN_RATE: f64 = 10.0;
const SHIP_SCALE: f64 = 2.5; // The hull outline is drawn this many times bigger than its raw coordinates

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_heading_points_up() {
        let ship = Ship::new(Point2D::zero(), Vector2D::zero(), 0.0);
        let fwd = ship.forward();
        assert_abs_diff_eq!(fwd.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fwd.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn nose_lines_up_with_forward() {
        let ship = Ship::new(Point2D::new(5.0, 5.0), Vector2D::zero(), 1.1);
        let nose = ship.hull()[0] - ship.pos;
        let fwd = ship.forward();
        assert_abs_diff_eq!(nose.x / nose.length(), fwd.x, epsilon = 1e-12);
        assert_abs_diff_eq!(nose.y / nose.length(), fwd.y, epsilon = 1e-12);
    }

    #[test]
    fn heading_wraps() {
        let ship = Ship::new(Point2D::zero(), Vector2D::zero(), -std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(ship.heading_degrees(), 270.0, epsilon = 1e-9);
    }
}
