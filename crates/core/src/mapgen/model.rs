//! Public data models for generated caves and the consumers that display them.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCave {
    /// Seed text the cave was generated from; feeding it back reproduces the grid.
    pub seed: String,
    pub seed_hash: u64,
    pub grid: Grid,
}

/// Something that presents a generated cave, such as a tile renderer.
///
/// [`super::MapGenerator::regenerate`] calls `teardown` before every `build`,
/// so an implementation can drop whatever it built for the previous cave.
pub trait CaveConsumer {
    fn teardown(&mut self);
    fn build(&mut self, cave: &GeneratedCave);
}
