pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::GenerationConfig;
pub use error::MapGenError;
pub use mapgen::{
    CaveConsumer, GeneratedCave, Grid, MapGenerator, Region, SeededRng, generate, regions_of,
};
pub use types::{Coord, Tile};
