//! Cellular-automaton smoothing over the Moore neighborhood.

use std::mem;

use crate::types::{Coord, Tile};

use super::grid::Grid;

/// Wall-neighbor count at which a cell keeps its previous value.
pub const TIE_WALL_COUNT: usize = 4;

/// Runs exactly `passes` smoothing passes and returns the final grid.
pub fn smooth(grid: Grid, passes: u32) -> Grid {
    let mut current = grid;
    let mut next = current.clone();
    for _ in 0..passes {
        smooth_pass(&current, &mut next);
        mem::swap(&mut current, &mut next);
    }
    current
}

/// One pass reading only `src` and writing every cell of `dst`.
///
/// `dst` must have the same dimensions as `src`; its previous contents are
/// overwritten.
pub fn smooth_pass(src: &Grid, dst: &mut Grid) {
    debug_assert_eq!((src.width(), src.height()), (dst.width(), dst.height()));
    for coord in src.coords() {
        let walls = surrounding_wall_count(src, coord);
        let tile = if walls > TIE_WALL_COUNT {
            Tile::Wall
        } else if walls < TIE_WALL_COUNT {
            Tile::Floor
        } else {
            src.tile(coord)
        };
        dst.set(coord, tile);
    }
}

/// Walls among the 8 neighbors of `coord`; positions outside the grid count as walls.
pub fn surrounding_wall_count(grid: &Grid, coord: Coord) -> usize {
    let mut walls = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let neighbor = Coord { x: coord.x + dx, y: coord.y + dy };
            if grid.tile(neighbor) == Tile::Wall {
                walls += 1;
            }
        }
    }
    walls
}
