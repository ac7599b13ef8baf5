//! # klondike-engine
//!
//! A deterministic Klondike Solitaire game-state engine.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: A deal is fully determined by its seed. The shuffle
//!    uses the Park-Miller generator with a bit-exact output stream, and new
//!    seeds come from an injectable `SeedSource`.
//!
//! 2. **Atomic Commands**: Every command either applies completely or is
//!    rejected with a `MoveError` and leaves the game untouched.
//!
//! 3. **Rendering Agnostic**: The engine takes `Command`s and hands out
//!    `BoardView` snapshots. Input mapping and drawing belong to the host.
//!
//! ## Architecture
//!
//! - **Rules as pure functions**: placement legality, run detection and win
//!   detection never mutate. `Game` checks them before every change.
//!
//! - **Selections are valid by construction**: a column selection is always
//!   cut from the longest face-up, descending, alternating-color run, so a
//!   run move only checks the run's head against the target.
//!
//! - **Persistent stock/waste**: `im::Vector` gives O(1) front operations and
//!   cheap board snapshots.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, seeds, deck building, commands, configuration, errors
//! - `rules`: Placement rules and win detection
//! - `state`: Board layout, selection, render snapshot
//! - `game`: The `Game` aggregate and its builder

pub mod core;
pub mod rules;
pub mod state;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit,
    LcgRng, Seed,
    SeedSource, EntropySeeds, ChaChaSeeds, FixedSeeds,
    create_deck,
    DrawMode, KlondikeConfig,
    Command, Outcome,
    MoveError, LayoutError,
};

pub use crate::state::{Board, BoardView, CardView, Selection, Span};

pub use crate::game::{Game, GameBuilder};
