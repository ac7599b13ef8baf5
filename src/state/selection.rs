//! Selection state.
//!
//! At most one thing is selected: the playable waste card, or a run at the
//! exposed end of one tableau column. Repeating the column selection walks
//! a small state machine:
//!
//! ```text
//! All --> Partial(run - 1) --> ... --> Partial(1) --> (cleared) --> All
//! ```
//!
//! A single-card run goes straight from `All` to cleared. Spans are always
//! measured against `rules::run_len`, so a selection never covers a card
//! that is face down or out of sequence.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::rules;

/// How much of a column's run is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// The whole movable run.
    All,
    /// The last `n` cards of the run.
    Partial(usize),
}

impl Span {
    /// Number of selected cards given the column's current run length.
    #[must_use]
    pub fn len(self, run_len: usize) -> usize {
        match self {
            Span::All => run_len,
            Span::Partial(n) => n.min(run_len),
        }
    }

    /// Next state after re-selecting the same column.
    ///
    /// Returns `None` when the selection should clear.
    #[must_use]
    pub fn shrink(self, run_len: usize) -> Option<Span> {
        match self.len(run_len) {
            0 | 1 => None,
            n => Some(Span::Partial(n - 1)),
        }
    }
}

/// What is currently selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// The playable waste card.
    Waste,
    /// The last cards of a column's run.
    Column { column: usize, span: Span },
}

impl Selection {
    /// True when something is selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::None)
    }

    /// The selected column, if the selection is a tableau run.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Selection::Column { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Number of cards the selection covers on `board`.
    #[must_use]
    pub fn len(&self, board: &Board) -> usize {
        match self {
            Selection::None => 0,
            Selection::Waste => usize::from(board.waste_top().is_some()),
            Selection::Column { column, span } => board
                .column(*column)
                .map_or(0, |cards| span.len(rules::run_len(cards))),
        }
    }

    /// True if the selection covers nothing on `board`.
    #[must_use]
    pub fn is_empty(&self, board: &Board) -> bool {
        self.len(board) == 0
    }

    /// Is card `index` of `column` highlighted?
    #[must_use]
    pub fn highlights_column_card(&self, board: &Board, column: usize, index: usize) -> bool {
        match self {
            Selection::Column { column: c, .. } if *c == column => {
                let height = board.column(column).map_or(0, <[_]>::len);
                index < height && index >= height - self.len(board)
            }
            _ => false,
        }
    }

    /// Is waste card `index` highlighted?
    #[must_use]
    pub fn highlights_waste_card(&self, index: usize) -> bool {
        matches!(self, Selection::Waste) && index == 0
    }
}
