//! Card identity: suits, ranks, colors.
//!
//! A card's identity is its suit and rank; exactly one of each of the 52
//! combinations exists in a game. `face_up` is game state carried alongside.

use serde::{Deserialize, Serialize};

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Card suit. Declaration order is the deck-building order and the
/// foundation pile order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Card color. Tableau runs alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Index of this suit's foundation pile.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// Color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered Ace (low) through King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (Ace) to 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// True if `self` sits exactly one step below `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self as u8 + 1 == other as u8
    }

    /// Short label used in card faces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Identity of the card, ignoring orientation.
    #[must_use]
    pub const fn key(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Copy of this card turned face up.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Self::face_up(self.suit, self.rank)
    }

    /// Copy of this card turned face down.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Self::new(self.suit, self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
    }

    #[test]
    fn test_suit_indices_follow_declaration() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_rank_is_one_below() {
        assert!(Rank::Five.is_one_below(Rank::Six));
        assert!(Rank::Queen.is_one_below(Rank::King));
        assert!(!Rank::Six.is_one_below(Rank::Five));
        assert!(!Rank::Five.is_one_below(Rank::Seven));
        assert!(!Rank::King.is_one_below(Rank::Ace));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    }

    #[test]
    fn test_card_orientation_keeps_identity() {
        let card = Card::new(Suit::Clubs, Rank::Queen);
        let up = card.turned_up();

        assert!(up.face_up);
        assert!(!up.turned_down().face_up);
        assert_eq!(card.key(), up.key());
        assert_ne!(card, up);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::face_up(Suit::Diamonds, Rank::Seven);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
