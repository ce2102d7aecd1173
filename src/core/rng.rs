//! Deterministic random number generation for deck ordering.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deck order
//! - **Entropy-seeded**: `from_entropy` for real play-throughs
//! - **Uniform shuffle**: Fisher-Yates over any slice
//!
//! ## Usage
//!
//! ```
//! use gift_deck::core::DeckRng;
//!
//! let mut rng1 = DeckRng::new(7);
//! let mut rng2 = DeckRng::new(7);
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to order a deck.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The drawn seed is kept so a surprising order can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = ChaCha8Rng::from_entropy().next_u64();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    ///
    /// Fisher-Yates: walks from the last index down to 1, swapping each
    /// element with a uniformly chosen element at or below it.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
