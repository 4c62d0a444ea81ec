//! Injectable randomness.
//!
//! The engine never reaches for a global RNG. Every operation that needs a
//! roll takes a `&mut impl RandomSource`, so tests can hand in a scripted
//! sequence while the binary wires up an entropy-seeded [`StdRng`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws uniform integers from an inclusive range.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

/// Production source backed by `rand`'s [`StdRng`].
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Seeded from OS entropy; every run differs.
    pub fn from_entropy() -> Self {
        EntropySource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed for reproducible games (`--seed`).
    pub fn seeded(seed: u64) -> Self {
        EntropySource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
///
/// `rand::seq::SliceRandom::shuffle` wants a `rand::Rng`; going through
/// `uniform` instead lets a scripted source fix the deal in tests, one draw
/// per swap from the back of the slice.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.uniform(0, i as u32) as usize;
        items.swap(i, j);
    }
}
