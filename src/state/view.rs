//! Read-only snapshot for the presentation layer.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::selection::Selection;
use crate::core::card::{Card, SUIT_COUNT};
use crate::core::config::DrawMode;
use crate::core::rng::Seed;

/// A card as rendered, with its selection highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: Card,
    pub highlighted: bool,
}

/// Everything a renderer needs, detached from the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cards left in the stock.
    pub stock_count: usize,
    /// The whole waste, playable card first.
    pub waste: Vec<CardView>,
    /// How many waste cards (from the front) to show.
    pub visible_waste: usize,
    /// Top card of each foundation pile, indexed by `Suit::index`.
    pub foundation_tops: [Option<Card>; SUIT_COUNT],
    /// Tableau columns, deepest card first.
    pub columns: Vec<Vec<CardView>>,
    pub selection: Selection,
    pub won: bool,
    pub mode: DrawMode,
    /// Seed of the current deal; `None` for hand-built boards.
    pub seed: Option<Seed>,
    /// Accepted card-moving commands this game.
    pub moves: u32,
}

/// Game-level facts the board itself does not know.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ViewStatus {
    pub won: bool,
    pub mode: DrawMode,
    pub visible_waste: usize,
    pub seed: Option<Seed>,
    pub moves: u32,
}

impl BoardView {
    pub(crate) fn capture(board: &Board, selection: &Selection, status: ViewStatus) -> Self {
        let waste = board
            .waste()
            .iter()
            .enumerate()
            .map(|(i, &card)| CardView {
                card,
                highlighted: selection.highlights_waste_card(i),
            })
            .collect::<Vec<_>>();

        let columns = board
            .tableau()
            .iter()
            .enumerate()
            .map(|(col, cards)| {
                cards
                    .iter()
                    .enumerate()
                    .map(|(i, &card)| CardView {
                        card,
                        highlighted: selection.highlights_column_card(board, col, i),
                    })
                    .collect()
            })
            .collect();

        Self {
            stock_count: board.stock().len(),
            visible_waste: status.visible_waste.min(waste.len()),
            waste,
            foundation_tops: std::array::from_fn(|i| board.foundation()[i].last().copied()),
            columns,
            selection: *selection,
            won: status.won,
            mode: status.mode,
            seed: status.seed,
            moves: status.moves,
        }
    }

    /// The waste cards a renderer should show, playable card first.
    #[must_use]
    pub fn visible_waste_cards(&self) -> &[CardView] {
        &self.waste[..self.visible_waste]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::Span;

    fn status(mode: DrawMode) -> ViewStatus {
        ViewStatus {
            won: false,
            mode,
            visible_waste: mode.count(),
            seed: Seed::new(12345),
            moves: 0,
        }
    }

    #[test]
    fn test_capture_fresh_deal() {
        let board = Board::deal(Seed::new(12345).unwrap());
        let view = BoardView::capture(&board, &Selection::None, status(DrawMode::One));

        assert_eq!(view.stock_count, 24);
        assert!(view.waste.is_empty());
        assert_eq!(view.visible_waste, 0);
        assert_eq!(view.foundation_tops, [None; SUIT_COUNT]);
        assert_eq!(view.columns.len(), 7);
        assert!(view.columns.iter().flatten().all(|c| !c.highlighted));
    }

    #[test]
    fn test_visible_waste_follows_mode() {
        let mut board = Board::deal(Seed::new(12345).unwrap());
        board.draw(3);
        board.draw(3);

        let one = BoardView::capture(&board, &Selection::Waste, status(DrawMode::One));
        assert_eq!(one.visible_waste_cards().len(), 1);
        assert!(one.waste[0].highlighted);
        assert!(!one.waste[1].highlighted);

        let three = BoardView::capture(&board, &Selection::None, status(DrawMode::Three));
        assert_eq!(three.visible_waste_cards().len(), 3);
        assert_eq!(three.waste.len(), 6);
    }

    #[test]
    fn test_column_highlight() {
        let board = Board::deal(Seed::new(12345).unwrap());
        let selection = Selection::Column { column: 6, span: Span::All };
        let view = BoardView::capture(&board, &selection, status(DrawMode::One));

        let highlighted: Vec<_> = view.columns[6].iter().map(|c| c.highlighted).collect();
        assert_eq!(highlighted, vec![false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_view_serialization() {
        let board = Board::deal(Seed::new(12345).unwrap());
        let view = BoardView::capture(&board, &Selection::None, status(DrawMode::Three));
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: BoardView = serde_json::from_str(&json).unwrap();

        assert_eq!(view, deserialized);
    }
}
