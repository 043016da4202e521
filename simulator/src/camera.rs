//! The camera, and turning world coordinates into screen coordinates and back.

use euclid::default::{Point2D, Size2D, Vector2D};

/// How much of the gap to the target the camera closes each frame.
pub const FOLLOW_FACTOR: f64 = 0.05;
/// Each zoom step multiplies or divides the zoom by this.
pub const ZOOM_STEP: f64 = 1.1;
const MIN_ZOOM: f64 = 1e-3;
const MAX_ZOOM: f64 = 1e3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// The world point at the middle of the screen
    pub pos: Point2D<f64>,
    /// Screen pixels per world unit. Always positive.
    zoom: f64,
    /// Size of the screen in pixels
    viewport: Size2D<f64>,
}

impl Camera {
    pub fn new(pos: Point2D<f64>, viewport: Size2D<f64>) -> Self {
        Self {
            pos,
            zoom: 1.0,
            viewport,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn viewport(&self) -> Size2D<f64> {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size2D<f64>) {
        self.viewport = viewport;
    }

    /// Put the camera back at `pos` with no zoom.
    pub fn reset(&mut self, pos: Point2D<f64>) {
        self.pos = pos;
        self.zoom = 1.0;
    }

    fn half_viewport(&self) -> Vector2D<f64> {
        Vector2D::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    pub fn world_to_screen(&self, world: Point2D<f64>) -> Point2D<f64> {
        ((world - self.pos) * self.zoom + self.half_viewport()).to_point()
    }

    pub fn screen_to_world(&self, screen: Point2D<f64>) -> Point2D<f64> {
        self.pos + (screen - self.half_viewport()).to_vector() / self.zoom
    }

    /// Ease towards `target`. Never snaps.
    pub fn follow(&mut self, target: Point2D<f64>) {
        self.pos += (target - self.pos) * FOLLOW_FACTOR;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }
}
