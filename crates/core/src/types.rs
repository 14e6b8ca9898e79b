use serde::{Deserialize, Serialize};

/// A single grid cell position. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Up, right, down, left; no diagonals.
    pub fn cardinal_neighbors(self) -> [Coord; 4] {
        [
            Coord { x: self.x, y: self.y - 1 },
            Coord { x: self.x + 1, y: self.y },
            Coord { x: self.x, y: self.y + 1 },
            Coord { x: self.x - 1, y: self.y },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
}

impl Tile {
    pub fn opposite(self) -> Self {
        match self {
            Self::Wall => Self::Floor,
            Self::Floor => Self::Wall,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Wall => 1,
            Self::Floor => 0,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }

    pub fn from_char(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            _ => None,
        }
    }
}
