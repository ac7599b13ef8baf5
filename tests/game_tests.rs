//! Gameplay integration tests.
//!
//! These tests drive `Game` through its public command surface:
//! - Drawing and recycling the stock
//! - Foundation and tableau moves from waste and columns
//! - Rejections leaving the game untouched
//! - Winning and dealing again

mod common;

use common::{down, foundations_through, game_with_tableau, layout, up};
use klondike_engine::core::DECK_SIZE;
use klondike_engine::{
    Command, DrawMode, FixedSeeds, Game, GameBuilder, MoveError, Outcome, Rank, Seed, Selection,
    Suit,
};

fn seed(v: u64) -> Seed {
    Seed::new(v).unwrap()
}

fn seeded_game(v: u64, mode: DrawMode) -> Game {
    GameBuilder::new()
        .seed(seed(v))
        .draw_mode(mode)
        .seed_source(FixedSeeds::new([seed(54321), seed(98765)]))
        .build()
}

// =============================================================================
// Draw / Recycle
// =============================================================================

/// Seed 12345, draw-1: one card moves face up to the waste.
#[test]
fn test_first_draw_one() {
    let mut game = seeded_game(12345, DrawMode::One);
    let stock_before = game.board().stock().len();

    assert_eq!(game.apply(Command::Draw), Ok(Outcome::Drew(1)));

    assert_eq!(game.board().stock().len(), stock_before - 1);
    assert_eq!(game.board().waste().len(), 1);
    assert!(game.board().waste_top().unwrap().face_up);
}

/// Draw-3 takes three per draw and the last draw takes what is left.
#[test]
fn test_draw_three_until_empty() {
    let mut game = seeded_game(12345, DrawMode::Three);

    for _ in 0..8 {
        assert_eq!(game.apply(Command::Draw), Ok(Outcome::Drew(3)));
    }
    assert!(game.board().stock().is_empty());
    assert_eq!(game.board().waste().len(), 24);

    assert_eq!(game.apply(Command::Draw), Ok(Outcome::Recycled(24)));
    assert_eq!(game.board().stock().len(), 24);
    assert!(game.board().waste().is_empty());
}

/// Recycling restores the original stock order, face down.
#[test]
fn test_recycle_restores_stock_order() {
    let mut game = seeded_game(42, DrawMode::One);
    let original: Vec<_> = game.board().stock().iter().copied().collect();

    for _ in 0..24 {
        game.draw().unwrap();
    }
    assert_eq!(game.draw(), Ok(Outcome::Recycled(24)));

    let recycled: Vec<_> = game.board().stock().iter().copied().collect();
    assert_eq!(recycled, original);
    assert_eq!(game.board().card_count(), DECK_SIZE);
}

/// Draw-3 recycling keeps the groups in place but reverses each group.
#[test]
fn test_draw_three_recycle_reverses_groups() {
    let mut game = seeded_game(12345, DrawMode::Three);
    let original: Vec<_> = game.board().stock().iter().copied().collect();

    for _ in 0..8 {
        game.draw().unwrap();
    }
    assert_eq!(game.draw(), Ok(Outcome::Recycled(24)));

    let expected: Vec<_> = original
        .chunks(3)
        .flat_map(|group| group.iter().rev().copied())
        .collect();
    let recycled: Vec<_> = game.board().stock().iter().copied().collect();
    assert_eq!(recycled, expected);
    assert_ne!(recycled, original);
}

/// With stock and waste both empty a draw is rejected and not counted.
#[test]
fn test_draw_with_nothing_left() {
    let mut tableau: [Vec<_>; 7] = Default::default();
    tableau[0] = vec![up(Suit::Spades, Rank::King)];
    let foundation = [
        common::foundation_run(Suit::Spades, Rank::Queen),
        common::foundation_run(Suit::Hearts, Rank::King),
        common::foundation_run(Suit::Diamonds, Rank::King),
        common::foundation_run(Suit::Clubs, Rank::King),
    ];
    let mut game = Game::from_board(layout(tableau, foundation, Vec::new()), DrawMode::One);

    let before = game.board().clone();
    assert_eq!(game.draw(), Err(MoveError::EmptySource));
    assert_eq!(game.apply(Command::Draw), Err(MoveError::EmptySource));
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.board().card_count(), DECK_SIZE);
}

// =============================================================================
// Foundation moves
// =============================================================================

/// An Ace on top of a column goes to its empty foundation pile.
#[test]
fn test_ace_to_foundation() {
    let mut game = game_with_tableau([
        vec![down(Suit::Diamonds, Rank::Nine), up(Suit::Hearts, Rank::Ace)],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    ]);

    game.select_column(0).unwrap();
    assert_eq!(game.move_to_foundation(), Ok(Outcome::ToFoundation { won: false }));

    assert_eq!(game.board().foundation_pile(Suit::Hearts).len(), 1);
    assert_eq!(game.board().column(0).unwrap().len(), 1);
    // The card underneath is turned up
    assert_eq!(game.board().column_top(0), Some(&up(Suit::Diamonds, Rank::Nine)));
    assert_eq!(game.selection(), &Selection::None);
}

/// Non-Aces cannot start a foundation; wrong ranks cannot extend one.
#[test]
fn test_foundation_rejections() {
    let mut game = game_with_tableau([
        vec![up(Suit::Hearts, Rank::Two)],
        vec![up(Suit::Spades, Rank::Ace)],
        vec![up(Suit::Spades, Rank::Three)],
        vec![],
        vec![],
        vec![],
        vec![],
    ]);

    game.select_column(0).unwrap();
    let before = game.board().clone();
    assert_eq!(
        game.move_to_foundation(),
        Err(MoveError::IllegalFoundationMove { card: up(Suit::Hearts, Rank::Two) })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.selection().column(), Some(0));

    game.select_column(1).unwrap();
    game.move_to_foundation().unwrap();

    game.select_column(2).unwrap();
    assert!(game.move_to_foundation().unwrap_err().is_rule_violation());
}

/// Waste card to foundation.
#[test]
fn test_waste_to_foundation() {
    let board = layout(Default::default(), Default::default(), vec![up(Suit::Clubs, Rank::Ace)]);
    let mut game = Game::from_board(board, DrawMode::One);

    game.select_waste().unwrap();
    assert_eq!(game.move_to_foundation(), Ok(Outcome::ToFoundation { won: false }));
    assert!(game.board().waste().is_empty());
    assert_eq!(game.board().foundation_pile(Suit::Clubs).len(), 1);
}

// =============================================================================
// Tableau moves
// =============================================================================

/// 5♠ onto 6♥ works; 5♠ onto 6♣ does not.
#[test]
fn test_alternating_colors() {
    let mut game = game_with_tableau([
        vec![up(Suit::Spades, Rank::Five)],
        vec![up(Suit::Hearts, Rank::Six)],
        vec![up(Suit::Clubs, Rank::Six)],
        vec![],
        vec![],
        vec![],
        vec![],
    ]);

    game.select_column(0).unwrap();
    let before = game.board().clone();
    assert_eq!(
        game.move_to_column(2),
        Err(MoveError::IllegalTableauMove { card: up(Suit::Spades, Rank::Five), column: 2 })
    );
    assert_eq!(game.board(), &before);

    assert_eq!(game.move_to_column(1), Ok(Outcome::ToColumn { cards: 1 }));
    assert_eq!(
        game.board().column(1).unwrap(),
        &[up(Suit::Hearts, Rank::Six), up(Suit::Spades, Rank::Five)]
    );
    assert!(game.board().column(0).unwrap().is_empty());
}

/// Only Kings go to empty columns.
#[test]
fn test_empty_column_takes_king() {
    let mut game = game_with_tableau([
        vec![down(Suit::Clubs, Rank::Two), up(Suit::Diamonds, Rank::King)],
        vec![up(Suit::Hearts, Rank::Queen)],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    ]);

    game.select_column(1).unwrap();
    assert!(game.move_to_column(2).is_err());

    game.select_column(0).unwrap();
    assert_eq!(game.move_to_column(2), Ok(Outcome::ToColumn { cards: 1 }));
    assert_eq!(game.board().column_top(0), Some(&up(Suit::Clubs, Rank::Two)));
}

/// A whole run moves in order and the source reveals its next card.
#[test]
fn test_run_move() {
    let mut game = game_with_tableau([
        vec![
            down(Suit::Diamonds, Rank::King),
            up(Suit::Spades, Rank::Nine),
            up(Suit::Hearts, Rank::Eight),
            up(Suit::Clubs, Rank::Seven),
        ],
        vec![up(Suit::Hearts, Rank::Ten)],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    ]);

    assert_eq!(game.select_column(0), Ok(Outcome::Selected(3)));
    assert_eq!(game.move_to_column(1), Ok(Outcome::ToColumn { cards: 3 }));

    assert_eq!(
        game.board().column(1).unwrap(),
        &[
            up(Suit::Hearts, Rank::Ten),
            up(Suit::Spades, Rank::Nine),
            up(Suit::Hearts, Rank::Eight),
            up(Suit::Clubs, Rank::Seven),
        ]
    );
    assert_eq!(game.board().column(0).unwrap(), &[up(Suit::Diamonds, Rank::King)]);
}

/// Waste card onto a column.
#[test]
fn test_waste_to_column() {
    let mut tableau: [Vec<_>; 7] = Default::default();
    tableau[3] = vec![up(Suit::Spades, Rank::King)];
    let board = layout(tableau, Default::default(), vec![up(Suit::Hearts, Rank::Queen), up(Suit::Clubs, Rank::Two)]);
    let mut game = Game::from_board(board, DrawMode::One);

    game.select_waste().unwrap();
    assert_eq!(game.move_to_column(3), Ok(Outcome::ToColumn { cards: 1 }));
    assert_eq!(game.board().waste_top(), Some(&up(Suit::Clubs, Rank::Two)));
    assert_eq!(game.board().column(3).unwrap().len(), 2);
}

/// Rejections never change the board, the selection or the move counter.
#[test]
fn test_rejections_are_atomic() {
    let mut game = seeded_game(12345, DrawMode::One);
    game.select_column(6).unwrap();

    let board = game.board().clone();
    let selection = *game.selection();
    let moves = game.moves();

    for command in [
        Command::MoveToColumn(6),
        Command::MoveToColumn(42),
        Command::SelectColumn(7),
        Command::SelectWaste,
    ] {
        assert!(game.apply(command).is_err(), "{command:?}");
        assert_eq!(game.board(), &board);
        assert_eq!(game.selection(), &selection);
        assert_eq!(game.moves(), moves);
    }
}

// =============================================================================
// Winning
// =============================================================================

fn nearly_won() -> Game {
    let mut tableau: [Vec<_>; 7] = Default::default();
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        tableau[i] = vec![up(suit, Rank::King)];
    }
    let board = layout(tableau, foundations_through(Rank::Queen), Vec::new());
    Game::from_board(board, DrawMode::One)
}

/// Completing all four piles sets the win flag; a new game clears it.
#[test]
fn test_win_and_new_game() {
    let mut game = nearly_won();

    for column in 0..3 {
        game.select_column(column).unwrap();
        assert_eq!(game.move_to_foundation(), Ok(Outcome::ToFoundation { won: false }));
        assert!(!game.is_won());
    }

    game.select_column(3).unwrap();
    assert_eq!(game.move_to_foundation(), Ok(Outcome::ToFoundation { won: true }));
    assert!(game.is_won());
    assert!(game.view().won);

    assert_eq!(game.apply(Command::Draw), Err(MoveError::GameWon));
    assert_eq!(game.apply(Command::Deselect), Ok(Outcome::Deselected));

    game.set_seed_source(Box::new(FixedSeeds::single(seed(12345))));
    assert_eq!(game.apply(Command::NewGame(None)), Ok(Outcome::Dealt(seed(12345))));
    assert!(!game.is_won());
    assert_eq!(game.board(), &klondike_engine::Board::deal(seed(12345)));
}

/// Once won, `apply` accepts exactly the commands flagged as allowed.
#[test]
fn test_won_game_command_gate() {
    let commands = [
        Command::Draw,
        Command::SelectColumn(0),
        Command::SelectWaste,
        Command::MoveToFoundation,
        Command::MoveToColumn(1),
        Command::TapColumn(2),
        Command::Deselect,
        Command::SetMode(DrawMode::Three),
        Command::NewGame(Some(DrawMode::One)),
    ];

    for command in commands {
        let board = layout(Default::default(), foundations_through(Rank::King), Vec::new());
        let mut game = Game::from_board(board, DrawMode::One);
        game.set_seed_source(Box::new(FixedSeeds::single(seed(12345))));
        assert!(game.is_won());

        let result = game.apply(command);
        if command.allowed_after_win() {
            assert!(result.is_ok(), "{command:?}: {result:?}");
        } else {
            assert_eq!(result, Err(MoveError::GameWon), "{command:?}");
        }
    }
}

/// A hand-built board that is already complete reports the win.
#[test]
fn test_from_won_board() {
    let board = layout(Default::default(), foundations_through(Rank::King), Vec::new());
    let game = Game::from_board(board, DrawMode::Three);
    assert!(game.is_won());
    assert_eq!(game.seed(), None);
}

// =============================================================================
// Mode and view
// =============================================================================

/// Switching mode mid-game keeps the waste and only changes later draws.
#[test]
fn test_mode_switch_not_retroactive() {
    let mut game = seeded_game(12345, DrawMode::Three);
    game.draw().unwrap();
    let waste: Vec<_> = game.board().waste().iter().copied().collect();

    assert_eq!(game.apply(Command::SetMode(DrawMode::One)), Ok(Outcome::ModeSet(DrawMode::One)));
    let still: Vec<_> = game.board().waste().iter().copied().collect();
    assert_eq!(waste, still);
    assert_eq!(game.view().visible_waste, 1);

    assert_eq!(game.draw(), Ok(Outcome::Drew(1)));
}

/// New game can switch mode in the same command.
#[test]
fn test_new_game_with_mode() {
    let mut game = seeded_game(12345, DrawMode::One);
    assert_eq!(game.apply(Command::NewGame(Some(DrawMode::Three))), Ok(Outcome::Dealt(seed(54321))));
    assert_eq!(game.draw_mode(), DrawMode::Three);
    assert_eq!(game.apply(Command::NewGame(None)), Ok(Outcome::Dealt(seed(98765))));
    assert_eq!(game.draw_mode(), DrawMode::Three);
}

/// The view mirrors the board and exposes the seed.
#[test]
fn test_view_contents() {
    let mut game = seeded_game(12345, DrawMode::One);
    game.draw().unwrap();
    game.select_waste().unwrap();

    let view = game.view();
    assert_eq!(view.stock_count, 23);
    assert_eq!(view.waste.len(), 1);
    assert!(view.waste[0].highlighted);
    assert_eq!(view.seed, Some(seed(12345)));
    assert_eq!(view.mode, DrawMode::One);
    assert_eq!(view.moves, 1);
    assert_eq!(view.columns.iter().map(Vec::len).sum::<usize>(), 28);
}
