//! The eight leaper moves and their angular ring.
//!
//! Orthogonal moves are straight jumps of length 3; diagonal moves are
//! (±2,±2) jumps. The asymmetry is the domain geometry, not an error.
//! Angles grow clockwise from north in whole degrees; no floating point
//! is involved anywhere.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::core::tile::Tile;
use crate::error::TourError;

/// Compass labels for the eight moves, in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// The angular ring, in canonical (compass) order.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

impl Direction {
    /// Canonical displacement of this direction's jump.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, 3),
            Direction::NE => (2, 2),
            Direction::E => (3, 0),
            Direction::SE => (2, -2),
            Direction::S => (0, -3),
            Direction::SW => (-2, -2),
            Direction::W => (-3, 0),
            Direction::NW => (-2, 2),
        }
    }

    /// Position of this direction in the canonical ring.
    #[inline]
    const fn ring_index(self) -> usize {
        match self {
            Direction::N => 0,
            Direction::NE => 1,
            Direction::E => 2,
            Direction::SE => 3,
            Direction::S => 4,
            Direction::SW => 5,
            Direction::W => 6,
            Direction::NW => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TourError::UnknownDirection(s.to_string()))
    }
}

/// Ordering sense for candidate moves relative to the previous move's angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

/// Both rotation senses, in canonical order.
pub const ROTATIONS: [Rotation; 2] = [Rotation::Clockwise, Rotation::Anticlockwise];

impl Rotation {
    pub const fn label(self) -> &'static str {
        match self {
            Rotation::Clockwise => "clockwise",
            Rotation::Anticlockwise => "anticlockwise",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rotation {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROTATIONS
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TourError::UnknownRotation(s.to_string()))
    }
}

/// One jump: a displacement plus its angle in the move list's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub dx: i32,
    pub dy: i32,
    /// Degrees in the relabeled frame of the owning [`MoveList`], a multiple
    /// of 45 in `0..360`. Not the compass angle unless the list starts at N.
    pub angle: i32,
}

/// Pure coordinate addition; bounds are the caller's concern.
impl Add<Move> for Tile {
    type Output = Tile;

    #[inline]
    fn add(self, rhs: Move) -> Tile {
        Tile::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// The eight moves, rotated so a chosen start direction comes first.
///
/// Angles are relabeled as consecutive multiples of 45° in the rotated
/// order. Every later "angle of the previous move" lookup compares against
/// this frame, which is what makes the ordering heuristic relative to the
/// start direction rather than to compass north.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList([Move; 8]);

impl MoveList {
    pub fn for_direction(start: Direction) -> Self {
        let offset = start.ring_index();
        let mut moves = [Move {
            dx: 0,
            dy: 0,
            angle: 0,
        }; 8];
        for (i, slot) in moves.iter_mut().enumerate() {
            let (dx, dy) = DIRECTIONS[(offset + i) % 8].delta();
            *slot = Move {
                dx,
                dy,
                angle: (i as i32) * 45,
            };
        }
        Self(moves)
    }

    #[inline]
    pub fn moves(&self) -> &[Move; 8] {
        &self.0
    }

    /// The move whose displacement equals `(dx, dy)` exactly.
    ///
    /// Exact integer comparison over the fixed table; returns `None` for a
    /// displacement outside the move set.
    pub fn find_delta(&self, dx: i32, dy: i32) -> Option<Move> {
        self.0.iter().copied().find(|m| m.dx == dx && m.dy == dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_list_is_canonical() {
        let list = MoveList::for_direction(Direction::N);
        for (i, m) in list.moves().iter().enumerate() {
            assert_eq!(m.angle, (i as i32) * 45);
            assert_eq!((m.dx, m.dy), DIRECTIONS[i].delta());
        }
    }

    #[test]
    fn rotated_list_relabels_angles() {
        let list = MoveList::for_direction(Direction::E);
        let first = list.moves()[0];
        assert_eq!((first.dx, first.dy), Direction::E.delta());
        assert_eq!(first.angle, 0);

        // Compass north sits six steps past east in the ring.
        let (ndx, ndy) = Direction::N.delta();
        let north = list.find_delta(ndx, ndy).unwrap();
        assert_eq!(north.angle, 270);
    }

    #[test]
    fn every_delta_is_unique() {
        let list = MoveList::for_direction(Direction::SW);
        for dir in DIRECTIONS {
            let (dx, dy) = dir.delta();
            let hits = list
                .moves()
                .iter()
                .filter(|m| (m.dx, m.dy) == (dx, dy))
                .count();
            assert_eq!(hits, 1, "{dir} delta must appear exactly once");
        }
    }
}
