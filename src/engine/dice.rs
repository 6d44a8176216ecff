//! Damage rolls.
//!
//! Combat never touches a global RNG: the session owns a [`Dice`] value,
//! so tests can swap in a fixed source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of damage rolls.
pub trait Dice {
    /// Uniform integer in `1..=max`. A `max` of 0 is treated as 1.
    fn roll(&mut self, max: u32) -> u32;
}

/// [`Dice`] backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeded from OS entropy, so every run plays differently.
    pub fn from_entropy() -> Self {
        RandomDice {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomDice {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self, max: u32) -> u32 {
        self.rng.gen_range(1..=max.max(1))
    }
}
