//! The mini-map in the corner.

use euclid::default::{Point2D, Size2D};

/// Radar panel size in pixels.
pub const RADAR_SIZE: f64 = 200.0;
/// Pixels on the radar per world unit.
pub const RADAR_SCALE: f64 = 0.05;

/// Where a thing at `pos` shows up on a radar centered on `center`,
/// in pixels from the radar's top-left corner.
/// Returns `None` if it's off the edge.
pub fn blip(center: Point2D<f64>, pos: Point2D<f64>) -> Option<Point2D<f64>> {
    let middle = RADAR_SIZE / 2.0;
    let offset = (pos - center) * RADAR_SCALE;
    let x = (middle + offset.x).floor();
    let y = (middle + offset.y).floor();
    if x >= 0.0 && x < RADAR_SIZE && y >= 0.0 && y < RADAR_SIZE {
        Some(Point2D::new(x, y))
    } else {
        None
    }
}

/// The radar's top-left corner on a screen of this size.
pub fn corner(screen: Size2D<f64>) -> Point2D<f64> {
    Point2D::new(screen.width - RADAR_SIZE - 10.0, 10.0)
}
