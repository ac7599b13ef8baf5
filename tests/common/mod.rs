//! Shared layout helpers for integration tests.

#![allow(dead_code)]

use klondike_engine::core::{ordered_deck, COLUMN_COUNT, SUIT_COUNT};
use klondike_engine::{Board, Card, DrawMode, Game, Rank, Suit};

/// A face-up card.
pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

/// A face-down card.
pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Build a board from the given tableau, foundation and waste. Every card
/// not placed ends up in the stock, face down, in deck order.
pub fn layout(
    tableau: [Vec<Card>; COLUMN_COUNT],
    foundation: [Vec<Card>; SUIT_COUNT],
    waste: Vec<Card>,
) -> Board {
    let placed: Vec<_> = tableau
        .iter()
        .flatten()
        .chain(foundation.iter().flatten())
        .chain(waste.iter())
        .map(|c| c.key())
        .collect();
    let stock = ordered_deck()
        .into_iter()
        .filter(|c| !placed.contains(&c.key()))
        .collect();

    Board::from_parts(stock, waste, foundation, tableau).expect("test layout must be valid")
}

/// Build a game around a tableau-only layout.
pub fn game_with_tableau(tableau: [Vec<Card>; COLUMN_COUNT]) -> Game {
    Game::from_board(layout(tableau, Default::default(), Vec::new()), DrawMode::One)
}

/// Foundation pile of `suit` holding Ace through `through`.
pub fn foundation_run(suit: Suit, through: Rank) -> Vec<Card> {
    Rank::ALL
        .iter()
        .take_while(|&&rank| rank <= through)
        .map(|&rank| up(suit, rank))
        .collect()
}

/// Four foundation piles, each built up to `through`.
pub fn foundations_through(through: Rank) -> [Vec<Card>; SUIT_COUNT] {
    Suit::ALL.map(|suit| foundation_run(suit, through))
}
