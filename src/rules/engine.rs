//! The Pig turn state machine.
//!
//! A `Game` advances one decision at a time:
//! - `step`: ask the current seat's strategy, then apply the decision
//! - `apply`: apply a decision directly (no strategy involved)
//! - `play`: step until someone wins
//!
//! Rolling a 1 ends the turn with nothing banked. Reaching the target,
//! either banked or still at risk, wins on the spot.

use crate::core::{Die, FaceSource, GameConfig, GameRng, PlayerId, Player};
use crate::error::{PigError, Result};
use crate::strategy::{Decision, PlayerFactory, Prompt, Seat, TurnView};

use super::event::GameEvent;

/// Where the match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingDecision(PlayerId),
    Won(PlayerId),
}

/// Result of advancing the game by one decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Same player decides again.
    Continue,
    /// The die passed to the next player.
    TurnEnded,
    GameWon(PlayerId),
}

type EventSink = Box<dyn FnMut(&GameEvent)>;

/// A match in progress.
pub struct Game {
    target: u32,
    die: Die,
    faces: Box<dyn FaceSource>,
    input: Box<dyn Prompt>,
    seats: Vec<Seat>,
    phase: Phase,
    turn_announced: bool,
    events: Vec<GameEvent>,
    sink: Option<EventSink>,
}

impl Game {
    /// Create a game. Seat order is turn order; seat 0 starts.
    pub fn new(
        target: u32,
        die: Die,
        seats: Vec<Seat>,
        faces: Box<dyn FaceSource>,
        input: Box<dyn Prompt>,
    ) -> Result<Self> {
        if target < 1 {
            return Err(PigError::InvalidTarget(target));
        }
        if seats.is_empty() {
            return Err(PigError::NoPlayers);
        }
        if seats.len() > usize::from(u8::MAX) {
            return Err(PigError::TooManyPlayers(seats.len()));
        }

        Ok(Self {
            target,
            die,
            faces,
            input,
            seats,
            phase: Phase::AwaitingDecision(PlayerId::new(0)),
            turn_announced: false,
            events: Vec::new(),
            sink: None,
        })
    }

    /// Build a game from configuration, rolling with a `GameRng` seeded
    /// from `config.seed`.
    pub fn from_config(config: &GameConfig, input: Box<dyn Prompt>) -> Result<Self> {
        let seats = config
            .named_seats()
            .map(|seat| PlayerFactory::from_config(&seat))
            .collect();
        Self::new(
            config.target,
            Die::new(config.sides)?,
            seats,
            Box::new(GameRng::new(config.seed)),
            input,
        )
    }

    /// Also hand every event to `sink` as it is recorded.
    #[must_use]
    pub fn on_event(mut self, sink: impl FnMut(&GameEvent) + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is, or who won.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        match self.phase {
            Phase::AwaitingDecision(player) | Phase::Won(player) => player,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Won(player) => Some(player),
            Phase::AwaitingDecision(_) => None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        self.seats[player.index()].player()
    }

    /// Players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, seat)| (PlayerId::new(i as u8), seat.player()))
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player.index()]
    }

    /// Everything recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run until someone wins. Returns the winner.
    pub fn play(&mut self) -> Result<PlayerId> {
        loop {
            if let Advance::GameWon(winner) = self.step()? {
                return Ok(winner);
            }
        }
    }

    /// Ask the current seat for one decision and apply it.
    ///
    /// An unrecognised token is reported as an event and leaves the state
    /// untouched; the same player is asked again on the next step.
    pub fn step(&mut self) -> Result<Advance> {
        let current = match self.phase {
            Phase::Won(winner) => return Ok(Advance::GameWon(winner)),
            Phase::AwaitingDecision(player) => player,
        };

        if !self.turn_announced {
            self.turn_announced = true;
            let player = self.player(current);
            let event = GameEvent::TurnStarted {
                player: current,
                name: player.name().to_string(),
                score: player.score(),
            };
            self.record(event);
        }

        let target = self.target;
        let (player, strategy) = self.seats[current.index()].parts_mut();
        let view = TurnView {
            player: current,
            name: player.name(),
            score: player.score(),
            turn_total: player.turn_total(),
            target,
        };
        let interactive = strategy.is_interactive();
        let name = player.name().to_string();

        match strategy.decide(&view, self.input.as_mut()) {
            Ok(decision) => {
                if !interactive {
                    self.record(GameEvent::Decided { name, decision });
                }
                Ok(self.apply(decision))
            }
            Err(PigError::InvalidDecision(token)) => {
                log::warn!("{} entered invalid input `{}`", name, token);
                self.record(GameEvent::InvalidInput { name, token });
                Ok(Advance::Continue)
            }
            Err(err) => Err(err),
        }
    }

    /// Apply `decision` for the current player.
    pub fn apply(&mut self, decision: Decision) -> Advance {
        let current = match self.phase {
            Phase::Won(winner) => return Advance::GameWon(winner),
            Phase::AwaitingDecision(player) => player,
        };

        match decision {
            Decision::Roll => self.roll(current),
            Decision::Hold => self.hold(current),
        }
    }

    fn roll(&mut self, current: PlayerId) -> Advance {
        let player = self.seats[current.index()].player_mut();
        let face = player.roll(&self.die, self.faces.as_mut());
        let event = GameEvent::Rolled {
            player: current,
            name: player.name().to_string(),
            face,
            score: player.score(),
            turn_total: player.turn_total(),
        };
        self.record(event);

        let player = self.player(current);
        if face == 1 {
            let event = GameEvent::Busted {
                player: current,
                name: player.name().to_string(),
            };
            self.record(event);
            self.switch_turn(current);
            Advance::TurnEnded
        } else if player.potential() >= self.target {
            self.win(current)
        } else {
            Advance::Continue
        }
    }

    fn hold(&mut self, current: PlayerId) -> Advance {
        let player = self.seats[current.index()].player_mut();
        let banked = player.hold();
        let event = GameEvent::Held {
            player: current,
            name: player.name().to_string(),
            banked,
            score: player.score(),
        };
        self.record(event);

        if self.player(current).score() >= self.target {
            self.win(current)
        } else {
            self.switch_turn(current);
            Advance::TurnEnded
        }
    }

    fn switch_turn(&mut self, current: PlayerId) {
        let next = current.next(self.seats.len());
        log::info!(
            "turn passes from {} to {}",
            self.player(current).name(),
            self.player(next).name()
        );
        self.phase = Phase::AwaitingDecision(next);
        self.turn_announced = false;
    }

    fn win(&mut self, winner: PlayerId) -> Advance {
        let player = self.player(winner);
        log::info!("{} wins with {}", player.name(), player.potential());
        let event = GameEvent::Won {
            player: winner,
            name: player.name().to_string(),
            score: player.potential(),
        };
        self.phase = Phase::Won(winner);
        self.record(event);
        Advance::GameWon(winner)
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink(&event);
        }
        self.events.push(event);
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("target", &self.target)
            .field("die", &self.die)
            .field("seats", &self.seats)
            .field("phase", &self.phase)
            .finish()
    }
}
