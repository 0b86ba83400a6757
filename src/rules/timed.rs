//! Playing against the clock.
//!
//! `TimedGame` holds a `Game` and drives it one decision at a time,
//! checking the clock before every step. A blocking read of human input is
//! not interrupted; the limit is enforced as soon as that decision lands.

use std::time::{Duration, Instant};

use crate::core::PlayerId;
use crate::error::Result;

use super::engine::{Advance, Game};
use super::event::GameEvent;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// How a timed match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won(PlayerId),
    /// Time ran out first. Nobody wins.
    TimedOut,
}

/// A `Game` with a wall-clock limit on the whole match.
pub struct TimedGame {
    game: Game,
    timeout: Duration,
    clock: Box<dyn Clock>,
    started: Option<Instant>,
}

impl TimedGame {
    pub fn new(game: Game, timeout: Duration) -> Self {
        Self {
            game,
            timeout,
            clock: Box::new(SystemClock),
            started: None,
        }
    }

    /// Use `clock` instead of wall-clock time.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn into_inner(self) -> Game {
        self.game
    }

    /// Time since `play` was first called, if it has been.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started
            .map(|start| self.clock.now().saturating_duration_since(start))
    }

    /// Play until someone wins or time runs out.
    ///
    /// The start time is taken on the first call and kept across calls.
    pub fn play(&mut self) -> Result<Outcome> {
        let clock = &self.clock;
        let start = *self.started.get_or_insert_with(|| clock.now());

        loop {
            let elapsed = self.clock.now().saturating_duration_since(start);
            if elapsed >= self.timeout {
                log::info!("time limit of {:?} reached after {:?}", self.timeout, elapsed);
                self.game.record(GameEvent::TimeUp { elapsed });
                return Ok(Outcome::TimedOut);
            }

            if let Advance::GameWon(winner) = self.game.step()? {
                return Ok(Outcome::Won(winner));
            }
        }
    }
}

impl std::fmt::Debug for TimedGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedGame")
            .field("game", &self.game)
            .field("timeout", &self.timeout)
            .field("started", &self.started)
            .finish()
    }
}
