//! Decision policies: roll again, or hold?
//!
//! Every seat carries a `Strategy`. The game asks it for each decision and
//! nothing else in the turn loop reads input, so there is exactly one
//! decision path per player kind:
//! - `Human`: reads `r` / `h` tokens through a `Prompt`
//! - `Heuristic`: holds once the turn total reaches a threshold
//!
//! `PlayerFactory` pairs a `Player` with the right strategy to form a `Seat`.

pub mod factory;
pub mod heuristic;
pub mod human;

pub use factory::{PlayerFactory, Seat};
pub use heuristic::Heuristic;
pub use human::{Human, LineInput, Terminal};

use std::str::FromStr;

use crate::core::PlayerId;
use crate::error::{PigError, Result};

/// What to do next in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Risk the turn total on another roll.
    Roll,
    /// Bank the turn total and pass the die.
    Hold,
}

/// Parses a per-turn token: `r` rolls, `h` holds. Case and surrounding
/// whitespace are ignored.
impl FromStr for Decision {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" => Ok(Decision::Roll),
            "h" => Ok(Decision::Hold),
            _ => Err(PigError::InvalidDecision(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Roll => write!(f, "roll"),
            Decision::Hold => write!(f, "hold"),
        }
    }
}

/// What a strategy gets to see when deciding.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub player: PlayerId,
    pub name: &'a str,
    /// Banked score.
    pub score: u32,
    /// Points at risk this turn.
    pub turn_total: u32,
    /// Score that wins the match.
    pub target: u32,
}

/// Source of console lines.
///
/// Implemented by `Terminal` for interactive play and by `LineInput` for
/// anything that implements `BufRead` (piped stdin, scripted tests).
pub trait Prompt {
    /// Show `prompt` and return the next line, without the line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// A decision policy bound to one seat.
pub trait Strategy {
    /// Decide whether to roll again.
    ///
    /// `input` is the table's shared console; policies that do not ask a
    /// person ignore it. A `PigError::InvalidDecision` is recoverable and
    /// makes the game ask again.
    fn decide(&mut self, view: &TurnView<'_>, input: &mut dyn Prompt) -> Result<Decision>;

    /// True if decisions come from a person at the console.
    fn is_interactive(&self) -> bool {
        false
    }
}
