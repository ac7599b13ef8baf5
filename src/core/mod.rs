//! Core engine types: cards, RNG, seeds, deck building, commands, configuration.
//!
//! Everything here is independent of the board layout. The `state` and
//! `rules` modules build on these types.

pub mod card;
pub mod rng;
pub mod seed;
pub mod deck;
pub mod config;
pub mod command;
pub mod error;

pub use card::{Card, Color, Rank, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use rng::{InvalidSeed, LcgRng, LcgRngState, Seed, MODULUS, MULTIPLIER};
pub use seed::{ChaChaSeeds, EntropySeeds, FixedSeeds, SeedSource};
pub use deck::{create_deck, ordered_deck, shuffle};
pub use config::{DrawMode, KlondikeConfig, COLUMN_COUNT, TABLEAU_DEAL};
pub use command::{Command, Outcome};
pub use error::{LayoutError, MoveError};
