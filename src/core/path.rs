use rustc_hash::FxHashSet;

use crate::core::tile::{Tile, TILE_COUNT};

/// An ordered, non-empty sequence of distinct tiles.
///
/// The first element is the start tile, the last is the current position.
/// A membership index mirrors the sequence so `visited` stays O(1) during
/// deep backtracking; `push`/`pop` keep the two views in lockstep.
#[derive(Debug, Clone)]
pub struct Path {
    tiles: Vec<Tile>,
    seen: FxHashSet<Tile>,
}

impl Path {
    pub fn new(start: Tile) -> Self {
        let mut seen = FxHashSet::default();
        seen.insert(start);
        Self {
            tiles: vec![start],
            seen,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The current position (last tile).
    #[inline]
    pub fn current(&self) -> Tile {
        self.tiles[self.tiles.len() - 1]
    }

    /// The tile before the current one, if the path has moved at all.
    #[inline]
    pub fn previous(&self) -> Option<Tile> {
        let n = self.tiles.len();
        (n >= 2).then(|| self.tiles[n - 2])
    }

    #[inline]
    pub fn visited(&self, tile: Tile) -> bool {
        self.seen.contains(&tile)
    }

    /// True iff every board tile appears in the path.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.tiles.len() == TILE_COUNT
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Extend the path by one tile. The caller guarantees the tile is legal;
    /// distinctness is the path's own invariant.
    pub fn push(&mut self, tile: Tile) {
        let fresh = self.seen.insert(tile);
        debug_assert!(fresh, "tile {tile} already in path");
        self.tiles.push(tile);
    }

    /// Retract the last extension. The start tile is never removed.
    pub fn pop(&mut self) -> Option<Tile> {
        if self.tiles.len() <= 1 {
            return None;
        }
        let tile = self.tiles.pop()?;
        self.seen.remove(&tile);
        Some(tile)
    }
}
