//! Klondike rules.
//!
//! - Placement legality for foundations and tableau columns
//! - Run detection for tableau selections
//! - Win detection
//!
//! `Game` consults these before every mutation; the rules themselves
//! never touch game state.

pub mod engine;
pub mod win;

pub use engine::{can_place_on_foundation, can_place_on_tableau, continues_run, is_run, run_len};
pub use win::is_won;
