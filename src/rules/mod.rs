//! Rules of Pig.
//!
//! - `engine`: the turn state machine (`Game`), advanced one decision at a time
//! - `timed`: `TimedGame`, which drives a `Game` against a wall-clock limit
//! - `event`: what happened, for printing or inspection
//!
//! Nothing here prints or reads the console directly; input comes through
//! a `Prompt` and output leaves as `GameEvent`s.

pub mod engine;
pub mod event;
pub mod timed;

pub use engine::{Advance, Game, Phase};
pub use event::GameEvent;
pub use timed::{Clock, Outcome, SystemClock, TimedGame};
