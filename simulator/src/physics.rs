//! Moves the ship around.

use crate::bodies::{Planet, Ship};
use euclid::default::{Point2D, Size2D, Vector2D};

/// Not the real one. Tuned so the default planets feel right at 60 fps.
pub const GRAV_CONSTANT: f64 = 6.67430e-1;

/// Reverse thrust pushes (and burns) at this fraction of forward thrust.
pub const REVERSE_FACTOR: f64 = 0.5;

/// Drift friction factors are given per frame at this rate.
pub const REFERENCE_FPS: f64 = 60.0;

/// Which keys are held down this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
}

/// How space behaves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    /// Open, unbounded space with gravity wells and no friction.
    Orbital,
    /// A wrap-around arena with no gravity. Velocity is multiplied by
    /// `friction` once per reference frame.
    Drift { bounds: Size2D<f64>, friction: f64 },
}

impl Policy {
    /// Whether planets take part in this kind of space.
    pub fn has_gravity(&self) -> bool {
        match self {
            Policy::Orbital => true,
            Policy::Drift { .. } => false,
        }
    }
}

/// Sum up the pull of every planet at `point`.
pub fn gravity_at(point: Point2D<f64>, planets: &[Planet]) -> Vector2D<f64> {
    planets
        .iter()
        .fold(Vector2D::zero(), |acc, planet| acc + pull_of(planet, point))
}

/// The pull of a single planet at `point`.
/// Inside half the planet's radius the pull stops growing.
pub fn pull_of(planet: &Planet, point: Point2D<f64>) -> Vector2D<f64> {
    let r = planet.pos - point;
    let actual = r.square_length();
    if actual == 0.0 {
        // No direction to pull in
        return Vector2D::zero();
    }
    let floor = planet.radius * 0.5;
    let dist_squared = actual.max(floor * floor);
    let magnitude = GRAV_CONSTANT * planet.mass / dist_squared;
    r / actual.sqrt() * magnitude
}

/// Advance the ship by `dt` seconds.
/// Does nothing if `dt` isn't positive.
pub fn step(ship: &mut Ship, planets: &[Planet], controls: Controls, policy: Policy, dt: f64) {
    if !(dt > 0.0) {
        return;
    }

    if controls.rotate_left {
        ship.angle -= ship.rotation_rate * dt;
    }
    if controls.rotate_right {
        ship.angle += ship.rotation_rate * dt;
    }

    ship.firing = false;
    if ship.fuel > 0.0 {
        if controls.thrust_forward {
            ship.vel += ship.forward() * (ship.thrust * dt);
            ship.fuel = (ship.fuel - ship.burn_rate * dt).max(0.0);
            ship.firing = true;
        }
        if controls.thrust_reverse {
            ship.vel -= ship.forward() * (ship.thrust * REVERSE_FACTOR * dt);
            ship.fuel = (ship.fuel - ship.burn_rate * REVERSE_FACTOR * dt).max(0.0);
            ship.firing = true;
        }
    }

    match policy {
        Policy::Orbital => {
            let acc = gravity_at(ship.pos, planets);
            ship.vel += acc * dt;
            ship.pos += ship.vel * dt;
        }
        Policy::Drift { bounds, friction } => {
            ship.vel = ship.vel * friction.powf(dt * REFERENCE_FPS);
            ship.pos += ship.vel * dt;
            ship.pos = Point2D::new(
                ship.pos.x.rem_euclid(bounds.width),
                ship.pos.y.rem_euclid(bounds.height),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn planet(x: f64, y: f64, mass: f64, radius: f64) -> Planet {
        Planet::new(Point2D::new(x, y), mass, radius, 0xffffff)
    }

    fn ship() -> Ship {
        Ship::new(Point2D::new(0.0, -300.0), Vector2D::new(40.0, 0.0), 0.0)
    }

    #[test]
    fn no_planets_no_pull() {
        assert_eq!(gravity_at(Point2D::new(12.0, -7.0), &[]), Vector2D::zero());
    }

    #[test]
    fn pulls_towards_planet() {
        let p = planet(100.0, 0.0, 1000.0, 10.0);
        let acc = gravity_at(Point2D::zero(), &[p]);
        assert!(acc.x > 0.0);
        assert_abs_diff_eq!(acc.y, 0.0);
        assert_abs_diff_eq!(acc.x, GRAV_CONSTANT * 1000.0 / 10_000.0, epsilon = 1e-12);
    }

    #[test]
    fn superposition() {
        let a = planet(100.0, 30.0, 5000.0, 20.0);
        let b = planet(-250.0, 80.0, 12000.0, 40.0);
        let c = planet(3.0, 3.0, 2000.0, 8.0);
        let at = Point2D::new(17.0, -42.0);
        let total = gravity_at(at, &[a, b, c]);
        let summed = pull_of(&a, at) + pull_of(&b, at) + pull_of(&c, at);
        assert_abs_diff_eq!(total.x, summed.x, epsilon = 1e-12);
        assert_abs_diff_eq!(total.y, summed.y, epsilon = 1e-12);
    }

    #[test]
    fn pull_is_capped_near_center() {
        let p = planet(0.0, 0.0, 20000.0, 40.0);
        let cap = GRAV_CONSTANT * 20000.0 / (20.0 * 20.0);
        for offset in &[19.0, 5.0, 1e-3, 1e-9] {
            let acc = gravity_at(Point2D::new(*offset, 0.0), &[p]);
            assert_abs_diff_eq!(acc.length(), cap, epsilon = 1e-9);
        }
        // Dead center has no direction.
        assert_eq!(gravity_at(Point2D::zero(), &[p]), Vector2D::zero());
    }

    #[test]
    fn nonpositive_dt_does_nothing() {
        let mut s = ship();
        let before = s;
        let held = Controls {
            thrust_forward: true,
            rotate_left: true,
            ..Default::default()
        };
        step(&mut s, &[planet(0.0, 0.0, 1.0, 1.0)], held, Policy::Orbital, 0.0);
        step(&mut s, &[], held, Policy::Orbital, -0.5);
        step(&mut s, &[], held, Policy::Orbital, std::f64::NAN);
        assert_eq!(s, before);
    }

    #[test]
    fn rotation_follows_held_keys() {
        let mut s = ship();
        let left = Controls {
            rotate_left: true,
            ..Default::default()
        };
        step(&mut s, &[], left, Policy::Orbital, 0.5);
        assert_abs_diff_eq!(s.angle, -s.rotation_rate * 0.5);
    }

    #[test]
    fn forward_thrust_burns_fuel() {
        let mut s = Ship::new(Point2D::zero(), Vector2D::zero(), 0.0);
        let fwd = Controls {
            thrust_forward: true,
            ..Default::default()
        };
        step(&mut s, &[], fwd, Policy::Orbital, 0.1);
        assert!(s.firing);
        assert_abs_diff_eq!(s.fuel, 99.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.vel.y, -12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.vel.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn reverse_thrust_is_half_strength() {
        let mut s = Ship::new(Point2D::zero(), Vector2D::zero(), 0.0);
        let back = Controls {
            thrust_reverse: true,
            ..Default::default()
        };
        step(&mut s, &[], back, Policy::Orbital, 0.1);
        assert_abs_diff_eq!(s.fuel, 99.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.vel.y, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_tank_cannot_fire() {
        let mut s = ship();
        s.fuel = 0.0;
        let vel = s.vel;
        let fwd = Controls {
            thrust_forward: true,
            ..Default::default()
        };
        step(&mut s, &[], fwd, Policy::Orbital, 0.1);
        assert!(!s.firing);
        assert_eq!(s.vel, vel);
    }

    #[test]
    fn flame_goes_out_when_keys_released() {
        let mut s = ship();
        let fwd = Controls {
            thrust_forward: true,
            ..Default::default()
        };
        step(&mut s, &[], fwd, Policy::Orbital, 0.1);
        assert!(s.firing);
        step(&mut s, &[], Controls::default(), Policy::Orbital, 0.1);
        assert!(!s.firing);
    }

    #[test]
    fn drift_wraps_around() {
        let policy = Policy::Drift {
            bounds: Size2D::new(800.0, 600.0),
            friction: 1.0,
        };
        let mut s = Ship::new(Point2D::new(790.0, 5.0), Vector2D::new(600.0, -600.0), 0.0);
        step(&mut s, &[], Controls::default(), policy, 1.0 / 30.0);
        assert_abs_diff_eq!(s.pos.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.pos.y, 585.0, epsilon = 1e-9);
    }

    #[test]
    fn drift_ignores_gravity_and_applies_friction() {
        let policy = Policy::Drift {
            bounds: Size2D::new(800.0, 600.0),
            friction: 0.99,
        };
        let mut s = Ship::new(Point2D::new(400.0, 300.0), Vector2D::new(60.0, 0.0), 0.0);
        let heavy = planet(410.0, 300.0, 1e9, 10.0);
        step(&mut s, &[heavy], Controls::default(), policy, 1.0 / REFERENCE_FPS);
        assert_abs_diff_eq!(s.vel.x, 60.0 * 0.99, epsilon = 1e-9);
        assert_abs_diff_eq!(s.vel.y, 0.0);
    }
}
