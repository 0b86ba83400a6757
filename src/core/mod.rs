//! Core types: dice, randomness, players and configuration.
//!
//! These know nothing about turns or decisions; the rules and strategies
//! are built on top.

pub mod config;
pub mod die;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GameMode, PlayerKind, SeatConfig, DEFAULT_TARGET, DEFAULT_TIMEOUT_SECS};
pub use die::{Die, LoadedDie, DEFAULT_SIDES};
pub use player::{Player, PlayerId};
pub use rng::{FaceSource, GameRng};
