//! Command surface consumed from the presentation layer.
//!
//! A presentation layer turns input (keys, clicks) into `Command`s and hands
//! them to `Game::apply`. The engine answers with an `Outcome` or a
//! `MoveError`; it never interprets input itself.

use serde::{Deserialize, Serialize};

use super::config::DrawMode;
use super::rng::Seed;

/// A player command.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{Command, DrawMode};
///
/// let commands = [
///     Command::Draw,
///     Command::SelectColumn(3),
///     Command::MoveToColumn(5),
///     Command::NewGame(Some(DrawMode::Three)),
/// ];
/// assert_eq!(commands.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Draw from the stock, or recycle the waste when the stock is empty.
    Draw,
    /// Select a column's run, or shrink the selection when it is already selected.
    SelectColumn(usize),
    /// Select the top waste card.
    SelectWaste,
    /// Send the selected card to its foundation.
    MoveToFoundation,
    /// Move the selection onto a column.
    MoveToColumn(usize),
    /// Clear the selection.
    Deselect,
    /// Deal a new game, optionally switching draw mode first.
    NewGame(Option<DrawMode>),
    /// Change the draw mode for subsequent draws.
    SetMode(DrawMode),
    /// Single-gesture column input: select, adjust, or move depending on
    /// what is currently selected.
    TapColumn(usize),
}

impl Command {
    /// True for commands that are accepted after the game is won.
    #[must_use]
    pub fn allowed_after_win(&self) -> bool {
        matches!(self, Command::Deselect | Command::NewGame(_) | Command::SetMode(_))
    }
}

/// What an accepted command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Cards moved from stock to waste.
    Drew(usize),
    /// The waste was turned over into a new stock of this many cards.
    Recycled(usize),
    /// A selection was made or adjusted; carries the selected card count.
    Selected(usize),
    /// The selection is now empty.
    Deselected,
    /// A card reached its foundation; `won` is set when that completed the game.
    ToFoundation { won: bool },
    /// A run of `cards` landed on a column.
    ToColumn { cards: usize },
    /// A new game was dealt from this seed.
    Dealt(Seed),
    /// The draw mode changed.
    ModeSet(DrawMode),
}
