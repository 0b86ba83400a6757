//! Game configuration types.
//!
//! A match is described up front by:
//! - `SeatConfig`: who sits where and what kind of player they are
//! - `GameMode`: regular, or timed with a wall-clock limit
//! - `GameConfig`: target score, die size, seed, mode and seats
//!
//! Nothing here touches the console; the CLI maps its flags onto these.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::die::DEFAULT_SIDES;
use crate::error::PigError;

/// Points needed to win a standard game.
pub const DEFAULT_TARGET: u32 = 100;

/// Wall-clock limit for a timed game, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Which decision policy drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Decisions are typed at the console.
    Human,
    /// Decisions come from the hold-at-threshold rule.
    Computer,
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(PigError::UnknownPlayerType(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub kind: PlayerKind,
    pub name: String,
}

impl SeatConfig {
    pub fn new(kind: PlayerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(PlayerKind::Human, name)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(PlayerKind::Computer, name)
    }
}

/// Parses `kind:name`, e.g. `computer:Hal`. A bare kind gets no name.
impl FromStr for SeatConfig {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = match s.split_once(':') {
            Some((kind, name)) => (kind, name.trim()),
            None => (s, ""),
        };
        Ok(Self::new(kind.parse()?, name))
    }
}

/// Regular play, or play against the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Regular,
    Timed { timeout_secs: u64 },
}

impl FromStr for GameMode {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(GameMode::Regular),
            "timed" => Ok(GameMode::Timed {
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            }),
            _ => Err(PigError::UnknownGameMode(s.trim().to_string())),
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score that wins the match.
    pub target: u32,

    /// Sides on the die.
    pub sides: u32,

    /// Seed for the game's RNG.
    pub seed: u64,

    pub mode: GameMode,

    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            sides: DEFAULT_SIDES,
            seed: 0,
            mode: GameMode::Regular,
            seats: vec![SeatConfig::human("Player 1"), SeatConfig::human("Player 2")],
        }
    }
}

impl GameConfig {
    /// Default configuration with the given seats.
    pub fn new(seats: Vec<SeatConfig>) -> Self {
        Self {
            seats,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switch to timed mode with the given limit.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.mode = GameMode::Timed { timeout_secs };
        self
    }

    /// Seats with an empty name get `Player N` by position.
    pub fn named_seats(&self) -> impl Iterator<Item = SeatConfig> + '_ {
        self.seats.iter().enumerate().map(|(i, seat)| {
            if seat.name.is_empty() {
                SeatConfig::new(seat.kind, format!("Player {}", i + 1))
            } else {
                seat.clone()
            }
        })
    }
}
