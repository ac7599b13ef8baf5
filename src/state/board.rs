//! Board layout: stock, waste, foundation and tableau.
//!
//! ## Orientation conventions
//!
//! - Stock: index 0 is the next card to draw. All face down.
//! - Waste: index 0 is the playable card. All face up.
//! - Foundation pile: index 0 is the Ace, last index is the top.
//! - Tableau column: index 0 is the deepest card, last index is the exposed one.
//!
//! Stock and waste are consumed and fed from the front, so they use
//! `im::Vector` (O(1) front push/pop, O(1) clone for snapshots).
//!
//! The board owns card placement only. Selection, draw mode and the win
//! flag live in `Game`.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
use crate::core::config::COLUMN_COUNT;
use crate::core::deck::create_deck;
use crate::core::error::LayoutError;
use crate::core::rng::Seed;
use crate::rules;

/// A foundation pile never holds more than one suit's thirteen cards.
pub type FoundationPile = SmallVec<[Card; RANK_COUNT]>;

/// A tableau column.
pub type Column = Vec<Card>;

/// Card placement for one game.
///
/// Deserializing validates the layout, so a `Board` always holds a full deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    stock: Vector<Card>,
    waste: Vector<Card>,
    foundation: [FoundationPile; SUIT_COUNT],
    tableau: [Column; COLUMN_COUNT],
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct BoardParts {
    stock: Vector<Card>,
    waste: Vector<Card>,
    foundation: [FoundationPile; SUIT_COUNT],
    tableau: [Column; COLUMN_COUNT],
}

impl TryFrom<BoardParts> for Board {
    type Error = LayoutError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        let board = Self {
            stock: parts.stock,
            waste: parts.waste,
            foundation: parts.foundation,
            tableau: parts.tableau,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Deal a fresh game from `seed`.
    ///
    /// Column `i` receives the next `i + 1` cards from the front of the
    /// shuffled deck, with only its last card turned up. The remaining 24
    /// cards form the stock.
    #[must_use]
    pub fn deal(seed: Seed) -> Self {
        let mut deck = create_deck(seed).into_iter();
        let tableau: [Column; COLUMN_COUNT] = std::array::from_fn(|i| {
            let mut column: Column = deck.by_ref().take(i + 1).collect();
            if let Some(last) = column.last_mut() {
                last.face_up = true;
            }
            column
        });

        Self {
            stock: deck.collect(),
            waste: Vector::new(),
            foundation: Default::default(),
            tableau,
        }
    }

    /// Build a board from explicit piles and validate it.
    ///
    /// `stock[0]` is the next card drawn, `waste[0]` the playable waste card.
    /// Foundation piles are indexed by `Suit::index`.
    pub fn from_parts(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundation: [Vec<Card>; SUIT_COUNT],
        tableau: [Vec<Card>; COLUMN_COUNT],
    ) -> Result<Self, LayoutError> {
        Self::try_from(BoardParts {
            stock: stock.into_iter().collect(),
            waste: waste.into_iter().collect(),
            foundation: foundation.map(FoundationPile::from_vec),
            tableau,
        })
    }

    /// Check card conservation and pile layout invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(LayoutError::CardCount { found });
        }

        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert(card.key()) {
                return Err(LayoutError::DuplicateCard { card: *card });
            }
        }

        if self.stock.iter().any(|c| c.face_up) {
            return Err(LayoutError::StockFaceUp);
        }
        if self.waste.iter().any(|c| !c.face_up) {
            return Err(LayoutError::WasteFaceDown);
        }

        for (pile, (cards, suit)) in self.foundation.iter().zip(Suit::ALL).enumerate() {
            let ordered = cards
                .iter()
                .zip(1u8..)
                .all(|(card, value)| card.suit == suit && card.rank.value() == value && card.face_up);
            if !ordered {
                return Err(LayoutError::FoundationOrder { pile });
            }
        }

        for (column, cards) in self.tableau.iter().enumerate() {
            if !column_is_well_formed(cards) {
                return Err(LayoutError::ColumnLayout { column });
            }
        }

        Ok(())
    }

    /// Total cards across stock, waste, foundation and tableau.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation.iter().map(|p| p.len()).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }

    /// Iterate every card on the board, pile by pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundation.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }

    // === Accessors ===

    /// The stock, next card first.
    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    /// The waste, playable card first.
    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    /// The playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.front()
    }

    /// All foundation piles, indexed by `Suit::index`.
    #[must_use]
    pub fn foundation(&self) -> &[FoundationPile; SUIT_COUNT] {
        &self.foundation
    }

    /// The foundation pile for `suit`.
    #[must_use]
    pub fn foundation_pile(&self, suit: Suit) -> &FoundationPile {
        &self.foundation[suit.index()]
    }

    /// All tableau columns.
    #[must_use]
    pub fn tableau(&self) -> &[Column; COLUMN_COUNT] {
        &self.tableau
    }

    /// A tableau column, or `None` when out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    /// The exposed card of a column.
    #[must_use]
    pub fn column_top(&self, index: usize) -> Option<&Card> {
        self.tableau.get(index).and_then(|c| c.last())
    }

    // === Mutations (validated by the caller) ===

    /// Move up to `count` cards from the stock front to the waste front,
    /// turning them up. The drawn slice keeps its order, so the first card
    /// taken from the stock becomes the playable waste card.
    ///
    /// Returns the number of cards moved.
    pub(crate) fn draw(&mut self, count: usize) -> usize {
        let take = count.min(self.stock.len());
        let rest = self.stock.split_off(take);
        let drawn = std::mem::replace(&mut self.stock, rest);
        for card in drawn.iter().rev() {
            self.waste.push_front(card.turned_up());
        }
        take
    }

    /// Turn the waste over into a new stock: reversed and face down.
    ///
    /// Returns the number of cards recycled.
    pub(crate) fn recycle(&mut self) -> usize {
        let recycled = self.waste.len();
        self.stock = self.waste.iter().rev().map(|c| c.turned_down()).collect();
        self.waste.clear();
        recycled
    }

    /// Remove the playable waste card.
    pub(crate) fn take_waste_top(&mut self) -> Option<Card> {
        self.waste.pop_front()
    }

    /// Remove the exposed card of a column, turning up the new exposed card.
    pub(crate) fn take_column_top(&mut self, index: usize) -> Option<Card> {
        let card = self.tableau[index].pop()?;
        self.reveal(index);
        Some(card)
    }

    /// Remove the last `len` cards of a column, turning up the new exposed card.
    pub(crate) fn take_run(&mut self, index: usize, len: usize) -> Column {
        let column = &mut self.tableau[index];
        let at = column.len().saturating_sub(len);
        let run = column.split_off(at);
        self.reveal(index);
        run
    }

    /// Append cards to a column, preserving their order.
    pub(crate) fn place_on_column(&mut self, index: usize, cards: impl IntoIterator<Item = Card>) {
        self.tableau[index].extend(cards);
    }

    /// Add a card to its suit's foundation pile.
    pub(crate) fn place_on_foundation(&mut self, card: Card) {
        self.foundation[card.suit.index()].push(card.turned_up());
    }

    fn reveal(&mut self, index: usize) {
        if let Some(last) = self.tableau[index].last_mut() {
            last.face_up = true;
        }
    }
}

/// Face-down prefix, then a non-empty face-up run ending at the exposed card.
fn column_is_well_formed(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return true;
    }
    match cards.iter().position(|c| c.face_up) {
        Some(first_up) => rules::is_run(&cards[first_up..]),
        None => false,
    }
}
