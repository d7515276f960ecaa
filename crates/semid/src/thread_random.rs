use crate::rand::RandSource;
use rand::{Rng, rng};

/// A [`RandSource`] backed by the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based, seeded from
/// the OS), and automatically reseeded periodically, which makes it
/// suitable as the default entropy source for externally visible
/// identifiers.
#[derive(Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
