//! Rejection reasons for engine commands and board layouts.
//!
//! A rejected command leaves the game untouched, so every variant is safe to
//! retry. Variants fall into three groups:
//! - invalid selection: nothing (or nothing usable) is selected
//! - rule violation: the move breaks rank, color or pile rules
//! - out of range: a column index the presentation layer should never send

use super::card::Card;

/// Why a command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The command needs an active selection.
    NoSelection,
    /// The selected source holds no card.
    EmptySource,
    /// The column has no face-up card to select.
    NoFaceUpCards { column: usize },
    /// The target column is the one the run came from.
    SameColumn { column: usize },
    /// `card` cannot go onto its foundation pile.
    IllegalFoundationMove { card: Card },
    /// `card` cannot head a run placed on `column`.
    IllegalTableauMove { card: Card, column: usize },
    /// Column index outside `[0, 7)`.
    ColumnOutOfRange { column: usize },
    /// The game is won; only a new deal, a mode change or deselect apply.
    GameWon,
}

impl MoveError {
    /// True for rank/color/pile rule violations.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            MoveError::SameColumn { .. }
                | MoveError::IllegalFoundationMove { .. }
                | MoveError::IllegalTableauMove { .. }
        )
    }

    /// True when the command lacked a usable selection.
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self,
            MoveError::NoSelection | MoveError::EmptySource | MoveError::NoFaceUpCards { .. }
        )
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::NoSelection => write!(f, "no card is selected"),
            MoveError::EmptySource => write!(f, "the selected pile is empty"),
            MoveError::NoFaceUpCards { column } => {
                write!(f, "column {} has no face-up cards", column + 1)
            }
            MoveError::SameColumn { column } => {
                write!(f, "cards already sit in column {}", column + 1)
            }
            MoveError::IllegalFoundationMove { card } => {
                write!(f, "{card} cannot go to its foundation")
            }
            MoveError::IllegalTableauMove { card, column } => {
                write!(f, "{card} cannot be placed on column {}", column + 1)
            }
            MoveError::ColumnOutOfRange { column } => {
                write!(f, "column index {column} is out of range")
            }
            MoveError::GameWon => write!(f, "the game is already won"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Why a hand-built board layout was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout does not hold exactly 52 cards.
    CardCount { found: usize },
    /// The same card appears twice.
    DuplicateCard { card: Card },
    /// A foundation pile is not an ascending same-suit run from the Ace.
    FoundationOrder { pile: usize },
    /// A column breaks the face-down prefix / face-up run layout.
    ColumnLayout { column: usize },
    /// A stock card is face up.
    StockFaceUp,
    /// A waste card is face down.
    WasteFaceDown,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::CardCount { found } => write!(f, "layout holds {found} cards, expected 52"),
            LayoutError::DuplicateCard { card } => write!(f, "{card} appears more than once"),
            LayoutError::FoundationOrder { pile } => {
                write!(f, "foundation pile {pile} is not an ascending run from the Ace")
            }
            LayoutError::ColumnLayout { column } => {
                write!(f, "column {} is not face-down cards under a face-up run", column + 1)
            }
            LayoutError::StockFaceUp => write!(f, "stock holds a face-up card"),
            LayoutError::WasteFaceDown => write!(f, "waste holds a face-down card"),
        }
    }
}

impl std::error::Error for LayoutError {}
