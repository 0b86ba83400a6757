//! Computer player: "hold at N".
//!
//! Keeps rolling while the turn total is below
//! `min(cap, goal - banked score)`, so it plays cautiously near the finish
//! line and never needs more than the points it is missing.

use super::{Decision, Prompt, Strategy, TurnView};
use crate::core::DEFAULT_TARGET;
use crate::error::Result;

/// Most a computer player will risk in one turn.
pub const DEFAULT_CAP: u32 = 25;

/// Threshold rule over the player's own banked score.
///
/// Opponents' scores are never consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heuristic {
    cap: u32,
    /// Score the player aims for. `None` plays toward the table's target.
    goal: Option<u32>,
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(DEFAULT_CAP)
    }
}

impl Heuristic {
    /// Risk at most `cap` per turn, aiming for the standard 100 points.
    #[must_use]
    pub fn new(cap: u32) -> Self {
        Self {
            cap,
            goal: Some(DEFAULT_TARGET),
        }
    }

    /// Aim for `goal` regardless of the table's target.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Aim for whatever target the table plays to.
    #[must_use]
    pub fn toward_table_target(mut self) -> Self {
        self.goal = None;
        self
    }

    /// Turn total at which this player holds, given its banked score.
    ///
    /// ```
    /// use pig_dice::strategy::Heuristic;
    ///
    /// let computer = Heuristic::default();
    /// assert_eq!(computer.threshold(0, 100), 25);
    /// assert_eq!(computer.threshold(80, 100), 20);
    ///
    /// // The goal stays at 100 on a longer table
    /// assert_eq!(computer.threshold(90, 200), 10);
    /// ```
    #[must_use]
    pub fn threshold(&self, banked: u32, target: u32) -> u32 {
        let goal = self.goal.unwrap_or(target);
        // Always risk at least one roll, or a player past its goal would stall.
        self.cap.min(goal.saturating_sub(banked)).max(1)
    }
}

impl Strategy for Heuristic {
    fn decide(&mut self, view: &TurnView<'_>, _input: &mut dyn Prompt) -> Result<Decision> {
        let threshold = self.threshold(view.score, view.target);
        let decision = if view.turn_total < threshold {
            Decision::Roll
        } else {
            Decision::Hold
        };
        log::debug!(
            "{} at {} + {} with threshold {}: {}",
            view.name,
            view.score,
            view.turn_total,
            threshold,
            decision
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::strategy::LineInput;

    fn decide(strategy: &mut Heuristic, score: u32, turn_total: u32) -> Decision {
        let view = TurnView {
            player: PlayerId::new(1),
            name: "Hal",
            score,
            turn_total,
            target: 100,
        };
        let mut input = LineInput::script([]);
        strategy.decide(&view, &mut input).unwrap()
    }

    #[test]
    fn test_fresh_player_holds_at_25() {
        let mut hal = Heuristic::default();
        assert_eq!(decide(&mut hal, 0, 0), Decision::Roll);
        assert_eq!(decide(&mut hal, 0, 24), Decision::Roll);
        assert_eq!(decide(&mut hal, 0, 25), Decision::Hold);
        assert_eq!(decide(&mut hal, 0, 31), Decision::Hold);
    }

    #[test]
    fn test_threshold_tightens_near_goal() {
        let mut hal = Heuristic::default();
        assert_eq!(hal.threshold(80, 100), 20);
        assert_eq!(decide(&mut hal, 80, 19), Decision::Roll);
        assert_eq!(decide(&mut hal, 80, 20), Decision::Hold);

        assert_eq!(hal.threshold(97, 100), 3);
    }

    #[test]
    fn test_never_reads_input() {
        // An empty script would fail with InputClosed if it were read
        let mut hal = Heuristic::default();
        assert_eq!(decide(&mut hal, 50, 0), Decision::Roll);
        assert!(!hal.is_interactive());
    }

    #[test]
    fn test_goal_defaults_to_100() {
        let hal = Heuristic::default();
        assert_eq!(hal.threshold(90, 200), 10);
        assert_eq!(hal.threshold(150, 300), 1);
        // A short table does not make the computer bolder or shyer
        assert_eq!(hal.threshold(0, 20), 25);
    }

    #[test]
    fn test_fixed_goal() {
        let hal = Heuristic::default().with_goal(60);
        assert_eq!(hal.threshold(40, 500), 20);
        assert_eq!(hal.threshold(120, 500), 1);
    }

    #[test]
    fn test_toward_table_target() {
        let hal = Heuristic::default().toward_table_target();
        assert_eq!(hal.threshold(90, 200), 25);
        assert_eq!(hal.threshold(190, 200), 10);
        assert_eq!(hal.threshold(12, 20), 8);
    }

    #[test]
    fn test_custom_cap() {
        let hal = Heuristic::new(10);
        assert_eq!(hal.threshold(0, 100), 10);
        assert_eq!(hal.threshold(95, 100), 5);
    }
}
