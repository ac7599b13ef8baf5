//! Game configuration types.
//!
//! - `DrawMode`: how many cards a draw turns over
//! - `KlondikeConfig`: draw mode plus presentation hints
//!
//! Configuration is plain data; it is serializable so a host can keep it in
//! its own settings file.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// Cards dealt to the tableau (1 + 2 + ... + 7).
pub const TABLEAU_DEAL: usize = COLUMN_COUNT * (COLUMN_COUNT + 1) / 2;

/// How many cards a draw moves from stock to waste.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Draw one card at a time.
    #[default]
    One,
    /// Draw three cards at a time.
    Three,
}

impl DrawMode {
    /// Cards per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Mode from a card count; only 1 and 3 are valid.
    #[must_use]
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(DrawMode::One),
            3 => Some(DrawMode::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draw-{}", self.count())
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards per draw.
    pub draw_mode: DrawMode,

    /// Waste cards surfaced to the presentation layer.
    ///
    /// `None` follows the draw mode (1 or 3).
    pub visible_waste: Option<usize>,
}

impl KlondikeConfig {
    /// Create the default configuration (draw one).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    /// Pin the number of visible waste cards.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    pub fn with_visible_waste(mut self, count: usize) -> Self {
        assert!(count > 0, "Visible waste count must be positive");
        self.visible_waste = Some(count);
        self
    }

    /// Number of waste cards to surface for the current mode.
    #[must_use]
    pub fn visible_waste_count(&self) -> usize {
        self.visible_waste.unwrap_or_else(|| self.draw_mode.count())
    }
}
