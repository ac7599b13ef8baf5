//! Injectable seed sources.
//!
//! A new deal needs a fresh seed. The engine never reaches for ambient
//! randomness itself; it asks a `SeedSource`. Production code uses
//! `EntropySeeds`, tests and replays use `ChaChaSeeds` or `FixedSeeds`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::rng::{Seed, MODULUS};

/// Supplies seeds for new deals.
pub trait SeedSource {
    /// Produce the seed for the next deal.
    fn next_seed(&mut self) -> Seed;
}

/// Draw a valid seed from any `rand` generator.
fn seed_from<R: Rng + ?Sized>(rng: &mut R) -> Seed {
    let raw = rng.gen_range(Seed::MIN.get()..MODULUS);
    // gen_range stays inside [1, MODULUS - 1]
    Seed::new(raw).unwrap_or(Seed::MIN)
}

/// Seeds from the thread-local, OS-seeded generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySeeds;

impl SeedSource for EntropySeeds {
    fn next_seed(&mut self) -> Seed {
        seed_from(&mut rand::thread_rng())
    }
}

/// Deterministic seed stream derived from a master seed.
///
/// Two instances built from the same master seed hand out the same
/// sequence of deals, so a whole session is reproducible.
#[derive(Clone, Debug)]
pub struct ChaChaSeeds {
    inner: ChaCha8Rng,
    master: u64,
}

impl ChaChaSeeds {
    /// Create a seed stream from a master seed.
    #[must_use]
    pub fn new(master: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(master),
            master,
        }
    }

    /// The master seed this stream was created from.
    #[must_use]
    pub fn master(&self) -> u64 {
        self.master
    }
}

impl SeedSource for ChaChaSeeds {
    fn next_seed(&mut self) -> Seed {
        seed_from(&mut self.inner)
    }
}

/// Cycles through a fixed list of seeds.
#[derive(Clone, Debug)]
pub struct FixedSeeds {
    seeds: Vec<Seed>,
    cursor: usize,
}

impl FixedSeeds {
    /// Create a source that replays `seeds` in order, wrapping around.
    ///
    /// # Panics
    ///
    /// Panics if `seeds` is empty.
    pub fn new(seeds: impl IntoIterator<Item = Seed>) -> Self {
        let seeds: Vec<Seed> = seeds.into_iter().collect();
        assert!(!seeds.is_empty(), "FixedSeeds needs at least one seed");
        Self { seeds, cursor: 0 }
    }

    /// A source that always returns the same seed.
    pub fn single(seed: Seed) -> Self {
        Self::new([seed])
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self) -> Seed {
        let seed = self.seeds[self.cursor];
        self.cursor = (self.cursor + 1) % self.seeds.len();
        seed
    }
}

impl<S: SeedSource + ?Sized> SeedSource for Box<S> {
    fn next_seed(&mut self) -> Seed {
        (**self).next_seed()
    }
}
