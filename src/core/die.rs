//! Dice.
//!
//! A `Die` only knows how many sides it has. The randomness comes from a
//! `FaceSource` handed in at roll time, so the same die can be driven by a
//! seeded `GameRng` in play or by a `LoadedDie` in tests.

use serde::{Deserialize, Serialize};

use super::rng::FaceSource;
use crate::error::{PigError, Result};

/// Number of sides on a standard die.
pub const DEFAULT_SIDES: u32 = 6;

/// A fair die with a fixed number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Create a die with `sides` faces.
    ///
    /// Fails with `InvalidDie` for a zero-sided die.
    pub fn new(sides: u32) -> Result<Self> {
        if sides < 1 {
            return Err(PigError::InvalidDie(sides));
        }
        Ok(Self { sides })
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once, returning a face in `1..=sides`.
    pub fn roll(&self, source: &mut dyn FaceSource) -> u32 {
        source.face(self.sides).clamp(1, self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
        }
    }
}

/// A face source that replays a fixed script of faces, cycling when it runs out.
///
/// ```
/// use pig_dice::core::{Die, LoadedDie};
///
/// let die = Die::default();
/// let mut loaded = LoadedDie::sequence([3, 1]);
/// assert_eq!(die.roll(&mut loaded), 3);
/// assert_eq!(die.roll(&mut loaded), 1);
/// assert_eq!(die.roll(&mut loaded), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDie {
    faces: Vec<u32>,
    cursor: usize,
}

impl LoadedDie {
    /// Replay `faces` in order, starting over at the end.
    pub fn sequence(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "A loaded die needs at least one face");
        Self { faces, cursor: 0 }
    }

    /// Always roll `face`.
    #[must_use]
    pub fn always(face: u32) -> Self {
        Self::sequence([face])
    }

    /// How many faces have been drawn so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for LoadedDie {
    fn face(&mut self, _sides: u32) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
