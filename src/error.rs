//! Error types for the Pig engine.

use thiserror::Error;

/// Everything that can go wrong while setting up or driving a match.
#[derive(Debug, Error)]
pub enum PigError {
    /// The player factory only knows `human` and `computer`.
    #[error("unknown player type `{0}` (expected `human` or `computer`)")]
    UnknownPlayerType(String),

    /// The startup game type was neither `regular` nor `timed`.
    #[error("unknown game type `{0}` (expected `regular` or `timed`)")]
    UnknownGameMode(String),

    /// A die needs at least one face.
    #[error("a die needs at least 1 side, got {0}")]
    InvalidDie(u32),

    /// The winning score must be positive.
    #[error("target score must be at least 1, got {0}")]
    InvalidTarget(u32),

    #[error("a game needs at least one player")]
    NoPlayers,

    /// Seats are numbered with a `u8`.
    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    /// A per-turn token that is neither roll nor hold. Recoverable.
    #[error("invalid input `{0}`, please enter 'r' to roll or 'h' to hold")]
    InvalidDecision(String),

    /// Input ran out while a human still had to decide.
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("failed to read from the terminal: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PigError {
    /// Errors the turn loop reports and then re-prompts on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PigError::InvalidDecision(_))
    }
}

pub type Result<T> = std::result::Result<T, PigError>;
