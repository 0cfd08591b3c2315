//! Choice of a default configuration from prior run records.

use tracing::debug;

use crate::core::tile::Tile;
use crate::geometry::{Direction, Rotation, DIRECTIONS, ROTATIONS};
use crate::store::ResultsStore;

/// Pick the (direction, rotation) with the historically smallest iteration
/// count for `tile`.
///
/// Every combination is ranked; one without a record costs the full budget,
/// the worst a recorded run can cost. Ties keep the earliest combination in
/// canonical ring order, so with no records at all this degenerates to
/// (N, clockwise). Deterministic by construction.
pub fn select_default(tile: Tile, store: &ResultsStore, budget: u64) -> (Direction, Rotation) {
    let mut best = (Direction::N, Rotation::Clockwise);
    let mut best_cost = u64::MAX;
    for direction in DIRECTIONS {
        for rotation in ROTATIONS {
            let cost = store
                .record(tile, direction, rotation)
                .map_or(budget, |r| r.iterations);
            if cost < best_cost {
                best_cost = cost;
                best = (direction, rotation);
            }
        }
    }
    debug!(
        %tile,
        direction = %best.0,
        rotation = %best.1,
        cost = best_cost,
        "history oracle suggestion"
    );
    best
}
