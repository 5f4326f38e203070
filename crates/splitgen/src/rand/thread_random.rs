use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// Used to pick a seed when a shuffler is built without one. The generator is
/// only consulted once per configuration; the permutation itself never draws
/// randomness.
///
/// This type does **not** store the RNG itself; it simply accesses the
/// thread-local generator on each call, so it may be freely used across
/// threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
