//! Player factory and decision policy integration tests.

use pig_dice::core::{Die, LoadedDie, PlayerId, PlayerKind};
use pig_dice::rules::{Advance, Game, GameEvent};
use pig_dice::strategy::{Decision, Heuristic, LineInput, PlayerFactory, Strategy, TurnView};
use pig_dice::PigError;

fn view(score: u32, turn_total: u32) -> TurnView<'static> {
    TurnView {
        player: PlayerId::new(0),
        name: "Hal",
        score,
        turn_total,
        target: 100,
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Test that an unknown player type produces no seat.
#[test]
fn test_alien_rejected() {
    match PlayerFactory::create_player("alien", "Zork") {
        Err(PigError::UnknownPlayerType(kind)) => assert_eq!(kind, "alien"),
        other => panic!("expected UnknownPlayerType, got {:?}", other),
    }
}

/// Test that kinds are matched case-insensitively.
#[test]
fn test_kind_tags() {
    for (tag, kind) in [
        ("human", PlayerKind::Human),
        ("HUMAN", PlayerKind::Human),
        ("computer", PlayerKind::Computer),
        (" Computer ", PlayerKind::Computer),
    ] {
        assert_eq!(PlayerFactory::create_player(tag, "x").unwrap().kind(), kind);
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// Test the threshold at a banked score of 80.
#[test]
fn test_computer_at_80_holds_at_20() {
    let mut hal = Heuristic::default();
    let mut input = LineInput::script([]);

    for turn_total in 0..20 {
        assert_eq!(
            hal.decide(&view(80, turn_total), &mut input).unwrap(),
            Decision::Roll
        );
    }
    for turn_total in 20..30 {
        assert_eq!(
            hal.decide(&view(80, turn_total), &mut input).unwrap(),
            Decision::Hold
        );
    }
}

/// Test that the threshold follows the banked score as the match goes on.
#[test]
fn test_computer_threshold_tracks_banked_score() {
    let seats = vec![PlayerFactory::build(PlayerKind::Computer, "Hal")];
    let mut game = Game::new(
        100,
        Die::default(),
        seats,
        Box::new(LoadedDie::always(4)),
        Box::new(LineInput::script([])),
    )
    .unwrap();

    // Fours: holds at 28 three times (84), then needs only 16
    let mut banked = Vec::new();
    while game.winner().is_none() {
        if game.step().unwrap() == Advance::TurnEnded {
            banked.push(game.player(PlayerId::new(0)).score());
        }
    }
    assert_eq!(banked, vec![28, 56, 84]);

    let won = game.events().last().unwrap();
    assert!(matches!(won, GameEvent::Won { score: 100, .. }));
}

/// Test that the computer aims for 100 whatever the table plays to.
#[test]
fn test_goal_ignores_table_target() {
    assert_eq!(Heuristic::default().threshold(90, 200), 10);
    assert_eq!(Heuristic::default().with_goal(150).threshold(90, 200), 25);
    assert_eq!(Heuristic::default().toward_table_target().threshold(90, 200), 25);
}

/// Test that a factory-built computer on a 200-point table still holds at
/// 10 once it has banked 90.
#[test]
fn test_computer_on_long_table_holds_near_100() {
    let seats = vec![PlayerFactory::build(PlayerKind::Computer, "Hal")];
    let mut game = Game::new(
        200,
        Die::default(),
        seats,
        Box::new(LoadedDie::sequence([6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5])),
        Box::new(LineInput::script([])),
    )
    .unwrap();

    // Sixes: holds at 30 three times (90), then 10 more is enough
    let mut banked = Vec::new();
    while banked.len() < 4 {
        if game.step().unwrap() == Advance::TurnEnded {
            banked.push(game.player(PlayerId::new(0)).score());
        }
    }
    assert_eq!(banked, vec![30, 60, 90, 100]);
}

// =============================================================================
// Human
// =============================================================================

/// Test that only the current human's seat consumes input.
#[test]
fn test_humans_share_one_console() {
    let seats = vec![
        PlayerFactory::build(PlayerKind::Human, "Ada"),
        PlayerFactory::build(PlayerKind::Human, "Bob"),
    ];
    let mut game = Game::new(
        100,
        Die::default(),
        seats,
        Box::new(LoadedDie::always(3)),
        Box::new(LineInput::script(["r", "h", "r", "r", "h"])),
    )
    .unwrap();

    for _ in 0..5 {
        game.step().unwrap();
    }

    assert_eq!(game.player(PlayerId::new(0)).score(), 3);
    assert_eq!(game.player(PlayerId::new(1)).score(), 6);
    assert_eq!(game.current_player(), PlayerId::new(0));
}
