//! Random initial fill with a forced outer wall ring.

use crate::types::{Coord, Tile};

use super::grid::Grid;
use super::rng::SeededRng;

/// Builds the unsmoothed grid.
///
/// Border cells are always `Wall` and consume no randomness. Every interior
/// cell consumes exactly one draw in `[0, 100)`, walking columns left to right
/// and each column top to bottom, and becomes `Wall` when the draw is below
/// `fill_percent`.
pub fn fill(width: usize, height: usize, fill_percent: u32, rng: &mut SeededRng) -> Grid {
    let mut grid = Grid::filled(width, height, Tile::Floor);
    for x in 0..width {
        for y in 0..height {
            let coord = Coord { x: x as i32, y: y as i32 };
            let tile = if grid.is_border(x, y) || (rng.next_in_range(0, 100) as u32) < fill_percent
            {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(coord, tile);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_ring_is_always_wall_even_at_zero_fill() {
        let mut rng = SeededRng::from_text("border");
        let grid = fill(7, 5, 0, &mut rng);
        for coord in grid.coords() {
            let expected = if grid.is_border_coord(coord) { Tile::Wall } else { Tile::Floor };
            assert_eq!(grid.tile(coord), expected, "{coord:?}");
        }
    }

    #[test]
    fn full_fill_walls_everything() {
        let mut rng = SeededRng::from_text("solid");
        let grid = fill(6, 6, 100, &mut rng);
        assert_eq!(grid.count(Tile::Wall), 36);
    }

    #[test]
    fn consumes_one_draw_per_interior_cell() {
        let mut rng = SeededRng::new(4_242);
        let _ = fill(6, 5, 45, &mut rng);

        let mut reference = SeededRng::new(4_242);
        for _ in 0..(4 * 3) {
            reference.next_in_range(0, 100);
        }
        assert_eq!(rng.next_in_range(0, 1_000_000), reference.next_in_range(0, 1_000_000));
    }

    #[test]
    fn interior_cells_follow_column_major_draw_order() {
        let mut rng = SeededRng::new(31);
        let grid = fill(5, 4, 50, &mut rng);

        let mut replay = SeededRng::new(31);
        for x in 1..4 {
            for y in 1..3 {
                let expected =
                    if (replay.next_in_range(0, 100) as u32) < 50 { Tile::Wall } else { Tile::Floor };
                assert_eq!(grid.cell_at(x, y), expected, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn tiny_grids_are_all_border() {
        for (width, height) in [(1, 1), (1, 6), (6, 1), (2, 2)] {
            let mut rng = SeededRng::new(0);
            let grid = fill(width, height, 0, &mut rng);
            assert_eq!(grid.count(Tile::Wall), width * height);
        }
    }
}
