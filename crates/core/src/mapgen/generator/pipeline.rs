//! Cave-construction pipeline that composes the mapgen stages.

use log::debug;

use crate::config::GenerationConfig;
use crate::types::Tile;

use super::super::fill::fill;
use super::super::grid::Grid;
use super::super::prune::prune_with_stats;
use super::super::rng::SeededRng;
use super::super::smooth::smooth;

/// fill -> smooth x `smooth_level` -> prune walls -> prune rooms.
///
/// `config` must already be validated.
pub(super) fn build_cave(config: &GenerationConfig, seed_hash: u64) -> Grid {
    let mut rng = SeededRng::new(seed_hash);

    let filled = fill(config.width, config.height, config.random_fill_percent, &mut rng);
    debug!(
        "filled {}x{} grid with {} walls (fill {}%)",
        config.width,
        config.height,
        filled.count(Tile::Wall),
        config.random_fill_percent
    );

    let smoothed = smooth(filled, config.smooth_level);
    debug!("smoothed {} passes, {} walls remain", config.smooth_level, smoothed.count(Tile::Wall));

    let (grid, stats) = prune_with_stats(
        smoothed,
        config.wall_cluster_threshold_size,
        config.room_threshold_size,
    );
    debug!(
        "finalized cave: {} floor cells, {} wall clusters and {} rooms pruned",
        grid.count(Tile::Floor),
        stats.wall_regions_removed,
        stats.rooms_removed
    );
    grid
}
