//! 4-connected region extraction by breadth-first flood fill.

use std::collections::VecDeque;

use crate::types::{Coord, Tile};

use super::grid::Grid;

/// One maximal 4-connected component of a single tile type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub tile: Tile,
    /// Cells in discovery order; the first cell is the scan seed.
    pub cells: Vec<Coord>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn touches_border(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&coord| grid.is_border_coord(coord))
    }
}

/// Every region of `tile`, seeded in row-major scan order.
///
/// Regions are pairwise disjoint and together cover exactly the cells of
/// `tile`. Each cell is enqueued at most once, so the whole call is linear in
/// the grid area.
pub fn regions_of(grid: &Grid, tile: Tile) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for start in grid.coords() {
        if visited[grid.index(start)] || grid.tile(start) != tile {
            continue;
        }
        regions.push(flood_region(grid, start, tile, &mut visited));
    }
    regions
}

fn flood_region(grid: &Grid, start: Coord, tile: Tile, visited: &mut [bool]) -> Region {
    let mut cells = Vec::new();
    let mut open = VecDeque::from([start]);
    visited[grid.index(start)] = true;

    while let Some(coord) = open.pop_front() {
        cells.push(coord);
        for next in coord.cardinal_neighbors() {
            if grid.get(next) != Some(tile) {
                continue;
            }
            let index = grid.index(next);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            open.push_back(next);
        }
    }

    Region { tile, cells }
}
