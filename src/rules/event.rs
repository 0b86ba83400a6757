//! Game events.
//!
//! Everything the table should hear about is recorded as a `GameEvent`.
//! The engine never prints; callers render events through `Display`
//! (the CLI prints one line per event) or inspect them directly in tests.

use std::time::Duration;

use crate::core::PlayerId;
use crate::strategy::Decision;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is up.
    TurnStarted {
        player: PlayerId,
        name: String,
        score: u32,
    },

    /// A non-interactive seat made a decision.
    Decided { name: String, decision: Decision },

    Rolled {
        player: PlayerId,
        name: String,
        face: u32,
        score: u32,
        turn_total: u32,
    },

    /// Rolled a 1 and lost the turn total.
    Busted { player: PlayerId, name: String },

    Held {
        player: PlayerId,
        name: String,
        banked: u32,
        score: u32,
    },

    /// A token that was neither roll nor hold. Nothing changed.
    InvalidInput { name: String, token: String },

    /// The match is over.
    Won {
        player: PlayerId,
        name: String,
        score: u32,
    },

    /// A timed match ran out of time with no winner.
    TimeUp { elapsed: Duration },
}

impl GameEvent {
    /// True for events that end the match.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, GameEvent::Won { .. } | GameEvent::TimeUp { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnStarted { name, score, .. } => {
                write!(f, "\nIt's {}'s turn. Score: {}", name, score)
            }
            GameEvent::Decided { name, decision } => write!(f, "{} chooses to {}", name, decision),
            GameEvent::Rolled {
                name,
                face,
                score,
                turn_total,
                ..
            } => write!(
                f,
                "{} rolled a {}. Score is {} and turn total is {}",
                name, face, score, turn_total
            ),
            GameEvent::Busted { name, .. } => {
                write!(f, "{} rolled a 1 and lost their turn total.", name)
            }
            GameEvent::Held {
                name, banked, score, ..
            } => write!(f, "{} holds {}. Score is now {}", name, banked, score),
            GameEvent::InvalidInput { token, .. } => {
                write!(f, "Invalid input `{}`, please try again.", token)
            }
            GameEvent::Won { name, score, .. } => write!(
                f,
                "{} has reached {} and won the game!",
                name, score
            ),
            GameEvent::TimeUp { elapsed } => {
                write!(f, "Time's up after {}s! Game over.", elapsed.as_secs())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_events() {
        let won = GameEvent::Won {
            player: PlayerId::new(0),
            name: "Ada".into(),
            score: 100,
        };
        assert!(won.is_final());
        assert!(GameEvent::TimeUp {
            elapsed: Duration::from_secs(60)
        }
        .is_final());
        assert!(!GameEvent::Busted {
            player: PlayerId::new(0),
            name: "Ada".into()
        }
        .is_final());
    }

    #[test]
    fn test_display_names_the_player() {
        let rolled = GameEvent::Rolled {
            player: PlayerId::new(1),
            name: "Hal".into(),
            face: 5,
            score: 20,
            turn_total: 9,
        };
        let line = rolled.to_string();
        assert!(line.contains("Hal"));
        assert!(line.contains('5'));
        assert!(line.contains('9'));
    }
}
