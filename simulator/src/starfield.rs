//! The stars in the background. Made once, never changed.

use crate::random::RandomSource;
use euclid::default::Point2D;

pub const STAR_COUNT: usize = 300;
/// Stars are scattered over a square this far from the origin in each direction.
pub const STAR_SPREAD: f64 = 4000.0;
/// Stars move this fraction as fast as the world when the camera pans.
pub const PARALLAX: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Point2D<f64>,
    /// Side length in pixels
    pub size: f64,
}

impl Star {
    /// Where this star sits in world space once parallax is applied.
    pub fn apparent_pos(&self) -> Point2D<f64> {
        (self.pos.to_vector() * PARALLAX).to_point()
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(random: &mut RandomSource, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Point2D::new(
                    random.range(-STAR_SPREAD, STAR_SPREAD),
                    random.range(-STAR_SPREAD, STAR_SPREAD),
                ),
                size: if random.chance(0.005) { 1.0 } else { 2.0 },
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
