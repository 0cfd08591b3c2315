use std::fmt;
use std::str::FromStr;

use crate::error::TourError;

/// Board edge length.
pub const BOARD_SIZE: i32 = 10;

/// Total number of tiles; a path of this length is a complete tour.
pub const TILE_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A board tile. Identity is by coordinate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff the tile lies on the 10×10 board.
    #[inline]
    pub fn on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }
}

/// Wire format is `x,y`, shared by the CLI and the results store.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Tile {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn invalid(s: &str) -> TourError {
            TourError::InvalidTile(s.to_string())
        }
        let (xs, ys) = s.split_once(',').ok_or_else(|| invalid(s))?;
        let x: i32 = xs.trim().parse().map_err(|_| invalid(s))?;
        let y: i32 = ys.trim().parse().map_err(|_| invalid(s))?;
        let tile = Tile::new(x, y);
        if !tile.on_board() {
            return Err(invalid(s));
        }
        Ok(tile)
    }
}
