//! Making and removing planets by clicking.

use crate::bodies::Planet;
use crate::random::RandomSource;
use euclid::default::Point2D;

/// Spawned planets weigh somewhere in here.
pub const MIN_SPAWN_MASS: f64 = 2000.0;
pub const MAX_SPAWN_MASS: f64 = 20000.0;
/// Radius limits for planets sized from their mass.
pub const MIN_RADIUS: f64 = 6.0;
pub const MAX_RADIUS: f64 = 80.0;
/// Clicks further than this from every planet don't remove anything.
pub const REMOVE_DISTANCE: f64 = 80.0;

const RADIUS_PER_ROOT_MASS: f64 = 0.8;
const MIN_CHANNEL: u8 = 80; // Keep spawned planets bright enough to see against the background

/// How big a planet of this mass is. Rounded down to a whole number.
pub fn radius_for_mass(mass: f64) -> f64 {
    (mass.sqrt() * RADIUS_PER_ROOT_MASS)
        .floor()
        .max(MIN_RADIUS)
        .min(MAX_RADIUS)
}

/// Roll up a new planet at `pos`.
pub fn random_planet(random: &mut RandomSource, pos: Point2D<f64>) -> Planet {
    let mass = random.range(MIN_SPAWN_MASS, MAX_SPAWN_MASS);
    let color = (random.channel(MIN_CHANNEL) as u32) << 16
        | (random.channel(MIN_CHANNEL) as u32) << 8
        | random.channel(MIN_CHANNEL) as u32;
    Planet::new(pos, mass, radius_for_mass(mass), color)
}

/// Find the planet closest to `point`, and how far away it is.
pub fn nearest(planets: &[Planet], point: Point2D<f64>) -> Option<(usize, f64)> {
    planets
        .iter()
        .map(|p| (p.pos - point).length())
        .enumerate()
        .fold(None, |best, (idx, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((idx, dist)),
        })
}

/// Remove the planet nearest `point` if it's close enough.
/// Returns the removed planet.
pub fn remove_near(planets: &mut Vec<Planet>, point: Point2D<f64>) -> Option<Planet> {
    match nearest(planets, point) {
        Some((idx, dist)) if dist < REMOVE_DISTANCE => Some(planets.remove(idx)),
        _ => None,
    }
}
