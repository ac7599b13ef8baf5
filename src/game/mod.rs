//! The playable game: command handling on top of board state and rules.
//!
//! `Game` is the only writer of its board. A presentation layer feeds it
//! `Command`s and renders `BoardView` snapshots.

mod builder;
mod klondike;

pub use builder::GameBuilder;
pub use klondike::Game;
