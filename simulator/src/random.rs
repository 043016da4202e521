//! The one place the simulation gets its randomness from.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Wraps a small, fast RNG so spawns and starfields can be replayed from a seed.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    /// Same seed, same planets.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Uniform in [low, high)
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low, high)
    }

    /// A color channel, from `low` up to and including 255.
    pub fn channel(&mut self, low: u8) -> u8 {
        self.rng.gen_range(low as u16, 256) as u8
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_repeat() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.range(-5.0, 5.0), b.range(-5.0, 5.0));
            assert_eq!(a.channel(80), b.channel(80));
        }
    }

    #[test]
    fn stays_in_range() {
        let mut r = RandomSource::seeded(99);
        for _ in 0..1000 {
            let x = r.range(2000.0, 20000.0);
            assert!(x >= 2000.0 && x < 20000.0);
            assert!(r.channel(80) >= 80);
        }
    }
}
