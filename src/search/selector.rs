//! Legal-move filtering and angular ordering.
//!
//! The ordering is the search heuristic: prefer minimal turning in the
//! chosen rotational sense, so exploration sweeps the board in a rough
//! spiral. It biases the backtracking order only; it proves nothing.

use crate::core::path::Path;
use crate::error::{Result, TourError};
use crate::geometry::{Move, MoveList, Rotation};

/// Moves whose destination is on-board and unvisited, in move-list order.
pub fn legal_moves(path: &Path, list: &MoveList) -> Vec<Move> {
    let from = path.current();
    list.moves()
        .iter()
        .copied()
        .filter(|&m| {
            let to = from + m;
            to.on_board() && !path.visited(to)
        })
        .collect()
}

/// Order `legal` by angular proximity to the previous move under `rotation`.
///
/// With no previous move (path shorter than two tiles) the legal moves pass
/// through in move-list order. Otherwise the previous displacement is matched
/// against the move list by exact delta equality; a displacement outside the
/// table is a geometry/config mismatch and aborts the run.
pub fn order_moves(
    path: &Path,
    legal: Vec<Move>,
    list: &MoveList,
    rotation: Rotation,
) -> Result<Vec<Move>> {
    let Some(prev) = path.previous() else {
        return Ok(legal);
    };
    let cur = path.current();
    let (dx, dy) = (cur.x - prev.x, cur.y - prev.y);
    let pivot = list
        .find_delta(dx, dy)
        .ok_or(TourError::UnmatchedDisplacement {
            from: prev,
            to: cur,
            dx,
            dy,
        })?
        .angle;

    let mut out = Vec::with_capacity(legal.len());
    match rotation {
        // Angles at or past the pivot first, then the wrap-around, both in
        // move-list order.
        Rotation::Clockwise => {
            out.extend(legal.iter().copied().filter(|m| m.angle >= pivot));
            out.extend(legal.iter().copied().filter(|m| m.angle < pivot));
        }
        // Mirror image: at or before the pivot first, both halves walked in
        // reverse move-list order.
        Rotation::Anticlockwise => {
            out.extend(legal.iter().rev().copied().filter(|m| m.angle <= pivot));
            out.extend(legal.iter().rev().copied().filter(|m| m.angle > pivot));
        }
    }
    Ok(out)
}
