//! Placement rules.
//!
//! Pure functions over cards and piles. They never mutate; `Game` asks them
//! before changing anything so a rejected move leaves no trace.

use crate::core::card::{Card, Rank};

/// Can `card` go onto a foundation pile whose top card is `top`?
///
/// An empty pile takes only an Ace. Otherwise the card must share the top's
/// suit and sit exactly one rank above it.
#[must_use]
pub fn can_place_on_foundation(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.is_one_below(card.rank),
    }
}

/// Can a run headed by `head` go onto a column whose top card is `top`?
///
/// An empty column takes only a King. Otherwise `head` must be one rank below
/// the (face-up) top card and of the opposite color.
#[must_use]
pub fn can_place_on_tableau(top: Option<&Card>, head: &Card) -> bool {
    match top {
        None => head.rank == Rank::King,
        Some(top) => {
            top.face_up && head.rank.is_one_below(top.rank) && head.color() != top.color()
        }
    }
}

/// True if `lower` may sit directly on `upper` inside a tableau run.
#[must_use]
pub fn continues_run(upper: &Card, lower: &Card) -> bool {
    upper.face_up
        && lower.face_up
        && lower.rank.is_one_below(upper.rank)
        && lower.color() != upper.color()
}

/// True if `cards` is a movable run: all face up, ranks descending by one,
/// colors alternating. An empty slice is not a run.
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    match cards {
        [] => false,
        [only] => only.face_up,
        _ => cards.windows(2).all(|pair| continues_run(&pair[0], &pair[1])),
    }
}

/// Length of the longest movable run at the bottom (exposed end) of a column.
///
/// Returns 0 when the column is empty or its last card is face down.
#[must_use]
pub fn run_len(column: &[Card]) -> usize {
    let Some(last) = column.last() else {
        return 0;
    };
    if !last.face_up {
        return 0;
    }

    let mut len = 1;
    for pair in column.windows(2).rev() {
        if !continues_run(&pair[0], &pair[1]) {
            break;
        }
        len += 1;
    }
    len
}
