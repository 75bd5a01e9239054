use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Детерминированный RNG стола.
///
/// Полностью определяется `seed` из конфига: восстановленный из снапшота стол
/// раздаёт те же карты, что раздал бы живой.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Следующий seed из этого же потока.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
