//! Win detection.

use crate::core::card::RANK_COUNT;
use crate::state::FoundationPile;

/// True when every foundation pile holds all thirteen ranks.
#[must_use]
pub fn is_won(foundation: &[FoundationPile]) -> bool {
    !foundation.is_empty() && foundation.iter().all(|pile| pile.len() == RANK_COUNT)
}
