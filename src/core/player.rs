//! Player identification and per-player scoring state.
//!
//! ## PlayerId
//!
//! Type-safe index into the game's seat order. The first player is
//! `PlayerId(0)` and turns rotate upward from there.
//!
//! ## Player
//!
//! Name, banked score and the running turn total, with the two mutators
//! the game is built from: `roll` and `hold`.

use serde::{Deserialize, Serialize};

use super::die::Die;
use super::rng::FaceSource;

/// Seat index, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one in a game of `player_count`.
    ///
    /// ```
    /// use pig_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A player's scoring state.
///
/// `score` only ever grows, and only through `hold`. `turn_total` is
/// cleared by a hold or by rolling a 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    turn_total: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            turn_total: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked points.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points at risk this turn.
    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Banked points plus what is at risk this turn.
    #[must_use]
    pub fn potential(&self) -> u32 {
        self.score.saturating_add(self.turn_total)
    }

    /// Roll `die` and add the face to the turn total.
    ///
    /// A 1 busts: the turn total is forfeited. Returns the face rolled.
    pub fn roll(&mut self, die: &Die, source: &mut dyn FaceSource) -> u32 {
        let face = die.roll(source);
        if face == 1 {
            self.turn_total = 0;
        } else {
            self.turn_total = self.turn_total.saturating_add(face);
        }
        log::debug!(
            "{} rolled {} (score {}, turn total {})",
            self.name,
            face,
            self.score,
            self.turn_total
        );
        face
    }

    /// Bank the turn total. Returns the amount banked.
    pub fn hold(&mut self) -> u32 {
        let banked = std::mem::take(&mut self.turn_total);
        self.score = self.score.saturating_add(banked);
        log::debug!("{} banked {} (score {})", self.name, banked, self.score);
        banked
    }
}
