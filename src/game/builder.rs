//! Builder for creating a `Game`.

use crate::core::config::{DrawMode, KlondikeConfig};
use crate::core::rng::Seed;
use crate::core::seed::{EntropySeeds, SeedSource};

use super::klondike::Game;

/// Builder for creating a `Game`.
///
/// Defaults: draw one, seeds from OS entropy.
///
/// ```
/// use klondike_engine::{ChaChaSeeds, DrawMode, GameBuilder};
///
/// let game = GameBuilder::new()
///     .draw_mode(DrawMode::Three)
///     .seed_source(ChaChaSeeds::new(42))
///     .build();
///
/// assert_eq!(game.draw_mode(), DrawMode::Three);
/// assert!(game.seed().is_some());
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: KlondikeConfig,
    seed: Option<Seed>,
    seeds: Option<Box<dyn SeedSource>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: KlondikeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn draw_mode(mut self, mode: DrawMode) -> Self {
        self.config.draw_mode = mode;
        self
    }

    /// Seed for the first deal. Without it the seed source supplies one.
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Source of seeds for this and later deals.
    pub fn seed_source(mut self, source: impl SeedSource + 'static) -> Self {
        self.seeds = Some(Box::new(source));
        self
    }

    /// Deal the first game.
    pub fn build(self) -> Game {
        let mut seeds = self.seeds.unwrap_or_else(|| Box::new(EntropySeeds));
        let seed = self.seed.unwrap_or_else(|| seeds.next_seed());
        Game::new(self.config, seed, seeds)
    }
}
