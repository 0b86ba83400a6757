//! Builds seats: a `Player` paired with its `Strategy`.

use crate::core::{Player, PlayerKind, SeatConfig};
use crate::error::Result;

use super::{Heuristic, Human, Strategy};

/// A player and the policy that decides for them.
///
/// The kind is fixed at creation.
pub struct Seat {
    player: Player,
    strategy: Box<dyn Strategy>,
    kind: PlayerKind,
}

impl Seat {
    /// Seat a player with a custom strategy.
    pub fn new(player: Player, strategy: Box<dyn Strategy>, kind: PlayerKind) -> Self {
        Self {
            player,
            strategy,
            kind,
        }
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Split borrow for the decide step: the strategy reads the player.
    pub(crate) fn parts_mut(&mut self) -> (&Player, &mut dyn Strategy) {
        (&self.player, self.strategy.as_mut())
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("player", &self.player)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Creates seats from a player-type tag.
pub struct PlayerFactory;

impl PlayerFactory {
    /// Create a seat from a textual kind (`human` or `computer`).
    ///
    /// Any other kind fails with `UnknownPlayerType` and no seat is built.
    ///
    /// ```
    /// use pig_dice::strategy::PlayerFactory;
    ///
    /// let seat = PlayerFactory::create_player("computer", "Hal").unwrap();
    /// assert_eq!(seat.player().name(), "Hal");
    ///
    /// assert!(PlayerFactory::create_player("alien", "Zork").is_err());
    /// ```
    pub fn create_player(kind: &str, name: impl Into<String>) -> Result<Seat> {
        Ok(Self::build(kind.parse()?, name))
    }

    /// Create a seat for an already-parsed kind.
    pub fn build(kind: PlayerKind, name: impl Into<String>) -> Seat {
        let strategy: Box<dyn Strategy> = match kind {
            PlayerKind::Human => Box::new(Human),
            PlayerKind::Computer => Box::new(Heuristic::default()),
        };
        Seat::new(Player::new(name), strategy, kind)
    }

    pub fn from_config(seat: &SeatConfig) -> Seat {
        Self::build(seat.kind, seat.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PigError;

    #[test]
    fn test_create_human() {
        let seat = PlayerFactory::create_player("human", "Ada").unwrap();
        assert_eq!(seat.kind(), PlayerKind::Human);
        assert_eq!(seat.player().name(), "Ada");
        assert_eq!(seat.player().score(), 0);
    }

    #[test]
    fn test_create_computer() {
        let seat = PlayerFactory::create_player("Computer", "Hal").unwrap();
        assert_eq!(seat.kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_unknown_kind_builds_nothing() {
        let result = PlayerFactory::create_player("alien", "Zork");
        assert!(matches!(result, Err(PigError::UnknownPlayerType(kind)) if kind == "alien"));
    }

    #[test]
    fn test_from_config() {
        let seat = PlayerFactory::from_config(&SeatConfig::computer("Hal"));
        assert_eq!(seat.kind(), PlayerKind::Computer);
        assert_eq!(seat.player().name(), "Hal");
    }
}
