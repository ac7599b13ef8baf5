//! Game state: card placement, selection, and the render snapshot.
//!
//! - `Board`: stock, waste, foundation, tableau
//! - `Selection`: the transient waste/run selection and its cycling span
//! - `BoardView`: read-only snapshot handed to the presentation layer

pub mod board;
pub mod selection;
pub mod view;

pub use board::{Board, Column, FoundationPile};
pub use selection::{Selection, Span};
pub use view::{BoardView, CardView};
