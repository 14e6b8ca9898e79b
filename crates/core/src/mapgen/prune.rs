//! Removal of undersized wall clusters and rooms.

use log::debug;

use crate::types::Tile;

use super::grid::Grid;
use super::regions::regions_of;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub wall_regions_removed: usize,
    pub rooms_removed: usize,
}

/// Prunes wall clusters, then rooms, and returns the new grid.
pub fn prune(grid: Grid, wall_threshold: usize, room_threshold: usize) -> Grid {
    prune_with_stats(grid, wall_threshold, room_threshold).0
}

/// Like [`prune`], also reporting how many regions each pass flipped.
///
/// Wall regions smaller than `wall_threshold` become floor unless they touch
/// the outer ring. Room extraction then runs on the updated grid, so floor
/// areas merged by removed walls are measured as one room; rooms smaller
/// than `room_threshold` become wall.
pub fn prune_with_stats(
    mut grid: Grid,
    wall_threshold: usize,
    room_threshold: usize,
) -> (Grid, PruneStats) {
    let wall_regions_removed = flip_small_regions(&mut grid, Tile::Wall, wall_threshold);
    let rooms_removed = flip_small_regions(&mut grid, Tile::Floor, room_threshold);
    debug!(
        "pruned {wall_regions_removed} wall clusters below {wall_threshold} and {rooms_removed} rooms below {room_threshold}"
    );
    (grid, PruneStats { wall_regions_removed, rooms_removed })
}

fn flip_small_regions(grid: &mut Grid, tile: Tile, threshold: usize) -> usize {
    if threshold == 0 {
        return 0;
    }
    let mut flipped = 0;
    for region in regions_of(grid, tile) {
        if region.len() >= threshold || (tile == Tile::Wall && region.touches_border(grid)) {
            continue;
        }
        for &coord in &region.cells {
            grid.set(coord, tile.opposite());
        }
        flipped += 1;
    }
    flipped
}
