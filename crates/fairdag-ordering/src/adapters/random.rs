//! Random Source Adapters

use crate::ports::outbound::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Production random source: a seeded `StdRng`.
///
/// Two instances built from the same seed produce the same sequence, so a
/// run is reproducible from its configuration alone.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }
}
