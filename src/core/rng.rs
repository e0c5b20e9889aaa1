//! Deterministic random number generation for replayable games.
//!
//! Every source of randomness in the engine (deck shuffles, the opponent's
//! exploit/explore roll, exploration picks) draws from a single `GameRng`
//! stream, so an entire game is reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG owned by the engine.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Successive games on one engine keep advancing the same stream, so a
/// restart with the same engine produces a fresh deck.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform value in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
