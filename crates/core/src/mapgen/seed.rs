//! Seed mixing and the uniform roll helpers every random decision goes through.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct Roller {
    rng: ChaCha8Rng,
}

impl Roller {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform value in `0..bound`; `bound` must be non-zero.
    pub fn roll_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.rng.next_u64() % bound as u64) as usize
    }

    /// Uniform value in `min..=max`.
    pub fn roll_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        min + self.roll_below((max - min + 1) as usize) as u32
    }

    /// True with `percent` in 100 odds.
    pub fn roll_percent(&mut self, percent: u32) -> bool {
        (self.roll_below(100) as u32) < percent
    }
}

pub fn derive_floor_seed(run_seed: u64, depth: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(depth).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
