//! Row-major wall/floor grid shared by every generation stage.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Coord, Tile};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRows", try_from = "GridRows")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self { width, height, cells: vec![tile; width * height] }
    }

    /// Parses rows of `#` (wall) and `.` (floor). Rows must be non-empty and equally wide.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().chars().count();
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let start = cells.len();
            for glyph in row.as_ref().chars() {
                cells.push(Tile::from_char(glyph)?);
            }
            if cells.len() - start != width {
                return None;
            }
        }
        Some(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Reads a cell; anything outside the grid reads as `Wall`.
    pub fn cell_at(&self, x: usize, y: usize) -> Tile {
        if x >= self.width || y >= self.height {
            return Tile::Wall;
        }
        self.cells[y * self.width + x]
    }

    pub fn tile(&self, coord: Coord) -> Tile {
        self.get(coord).unwrap_or(Tile::Wall)
    }

    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(self.cells[self.index(coord)])
    }

    pub(crate) fn set(&mut self, coord: Coord, tile: Tile) {
        debug_assert!(self.in_bounds(coord));
        let index = self.index(coord);
        self.cells[index] = tile;
    }

    /// True for cells on the outer ring of the grid.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x < self.width
            && y < self.height
            && (x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1)
    }

    pub fn is_border_coord(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.is_border(coord.x as usize, coord.y as usize)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Coord { x: x as i32, y: y as i32 }))
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|tile| tile.to_char()).collect())
            .collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.cells.iter().map(|tile| tile.to_byte()));
        bytes
    }

    /// Stable 64-bit digest of [`Grid::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Row-major offset of an in-bounds coordinate.
    pub(crate) fn index(&self, coord: Coord) -> usize {
        (coord.y as usize) * self.width + (coord.x as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct GridRows {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

impl From<Grid> for GridRows {
    fn from(grid: Grid) -> Self {
        Self { width: grid.width, height: grid.height, rows: grid.rows() }
    }
}

impl TryFrom<GridRows> for Grid {
    type Error = String;

    fn try_from(value: GridRows) -> Result<Self, Self::Error> {
        let grid = Grid::from_rows(&value.rows)
            .ok_or_else(|| "grid rows must be equally wide and contain only '#' or '.'".to_string())?;
        if grid.width != value.width || grid.height != value.height {
            return Err(format!(
                "grid rows describe {}x{} but header says {}x{}",
                grid.width, grid.height, value.width, value.height
            ));
        }
        Ok(grid)
    }
}
