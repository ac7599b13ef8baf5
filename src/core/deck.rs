//! Deck construction and the seeded Fisher-Yates shuffle.

use super::card::{Card, Rank, Suit, DECK_SIZE};
use super::rng::{LcgRng, Seed};

/// The 52 cards in suit-major, rank-ascending order, all face down.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Shuffle a slice in place with Fisher-Yates, highest index first.
///
/// For `i` from the last index down to 1, swaps `i` with
/// `j = floor(next_f64() * (i + 1))`. Consumes exactly `len - 1` values.
pub fn shuffle<T>(slice: &mut [T], rng: &mut LcgRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_index(i + 1);
        slice.swap(i, j);
    }
}

/// Build a shuffled deck for `seed`.
///
/// The permutation is fully determined by the seed.
#[must_use]
pub fn create_deck(seed: Seed) -> Vec<Card> {
    let mut deck = ordered_deck();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    let mut rng = LcgRng::new(seed);
    shuffle(&mut deck, &mut rng);
    deck
}
