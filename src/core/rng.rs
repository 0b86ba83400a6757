//! Deterministic random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Injected**: The game owns its source; there is no global seed
//!
//! ```
//! use pig_dice::core::{FaceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same faces
//! assert_eq!(a.face(6), b.face(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Something that can produce die faces.
///
/// Implementations must return a value in `1..=sides` for `sides >= 1`.
pub trait FaceSource {
    /// Draw one face of a die with `sides` faces.
    fn face(&mut self, sides: u32) -> u32;
}

/// Seeded RNG backing real dice.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl FaceSource for GameRng {
    fn face(&mut self, sides: u32) -> u32 {
        self.gen_range(1..=sides.max(1))
    }
}
