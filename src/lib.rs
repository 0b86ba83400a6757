//! # pig-dice
//!
//! The dice game Pig: players take turns rolling a die, piling up a turn
//! total, and choosing to bank it or risk it on another roll. A 1 wipes the
//! turn total and passes the die. First to the target score wins.
//!
//! ## Design Principles
//!
//! 1. **Step-driven**: `Game::step` advances exactly one decision, so
//!    wrappers like `TimedGame` can check conditions between decisions.
//!
//! 2. **One decision path**: every seat owns a `Strategy`; the engine asks
//!    it and nothing else reads input.
//!
//! 3. **Injected randomness**: dice roll from a `FaceSource` the caller
//!    constructs (`GameRng` with a seed, or `LoadedDie` with a script).
//!
//! ## Modules
//!
//! - `core`: dice, RNG, players, configuration
//! - `strategy`: human and computer decision policies, player factory
//! - `rules`: turn state machine, events, timed play
//! - `error`: `PigError`
//!
//! ## Example
//!
//! ```
//! use pig_dice::core::{Die, LoadedDie, PlayerId};
//! use pig_dice::rules::Game;
//! use pig_dice::strategy::{LineInput, PlayerFactory};
//!
//! let seats = vec![
//!     PlayerFactory::create_player("computer", "Hal").unwrap(),
//!     PlayerFactory::create_player("computer", "Deep").unwrap(),
//! ];
//! let mut game = Game::new(
//!     20,
//!     Die::default(),
//!     seats,
//!     Box::new(LoadedDie::always(5)),
//!     Box::new(LineInput::script([])),
//! )
//! .unwrap();
//!
//! assert_eq!(game.play().unwrap(), PlayerId::new(0));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Die, FaceSource, GameConfig, GameMode, GameRng, LoadedDie, Player, PlayerId, PlayerKind,
    SeatConfig,
};

pub use crate::error::{PigError, Result};

pub use crate::rules::{Advance, Clock, Game, GameEvent, Outcome, Phase, SystemClock, TimedGame};

pub use crate::strategy::{
    Decision, Heuristic, Human, LineInput, PlayerFactory, Prompt, Seat, Strategy, Terminal,
    TurnView,
};
