//! Procedural cave generation split into one submodule per pipeline stage.

pub mod fill;
pub mod grid;
pub mod model;
pub mod prune;
pub mod regions;
pub mod rng;
pub mod seed;
pub mod smooth;

mod generator;

pub use generator::MapGenerator;
pub use grid::Grid;
pub use model::{CaveConsumer, GeneratedCave};
pub use regions::{Region, regions_of};
pub use rng::SeededRng;

use crate::config::GenerationConfig;
use crate::error::MapGenError;

/// Validates `config` and generates one finalized grid.
///
/// `seed_override` takes precedence over both `seed` and `use_random_seed`.
pub fn generate(
    config: &GenerationConfig,
    seed_override: Option<&str>,
) -> Result<Grid, MapGenError> {
    Ok(MapGenerator::new(config.clone())?.generate(seed_override).grid)
}
