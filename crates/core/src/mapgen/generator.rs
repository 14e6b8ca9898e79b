//! High-level cave generation orchestration and re-generation for consumers.

mod pipeline;

use log::info;

use crate::config::GenerationConfig;
use crate::error::MapGenError;

use super::grid::Grid;
use super::model::{CaveConsumer, GeneratedCave};
use super::seed::{hash_seed_text, resolve_seed_text};
use pipeline::build_cave;

/// Validated generation settings. Holds no grid state between calls.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    config: GenerationConfig,
}

impl MapGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, MapGenError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates a fresh cave. See [`resolve_seed_text`] for how the seed is chosen.
    pub fn generate(&self, seed_override: Option<&str>) -> GeneratedCave {
        let seed = resolve_seed_text(&self.config, seed_override);
        let seed_hash = hash_seed_text(&seed);
        info!(
            "generating {}x{} cave from seed {seed:?} ({seed_hash:#018x})",
            self.config.width, self.config.height
        );
        let grid = build_cave(&self.config, seed_hash);
        GeneratedCave { seed, seed_hash, grid }
    }

    /// Generates directly from an integer seed, bypassing seed text.
    pub fn generate_with_seed_hash(&self, seed_hash: u64) -> Grid {
        build_cave(&self.config, seed_hash)
    }

    /// Tears down the consumer's previous cave, then builds it a new one.
    pub fn regenerate<C: CaveConsumer + ?Sized>(
        &self,
        seed_override: Option<&str>,
        consumer: &mut C,
    ) -> GeneratedCave {
        consumer.teardown();
        let cave = self.generate(seed_override);
        consumer.build(&cave);
        cave
    }
}
