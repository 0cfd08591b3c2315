//! Recursive depth-first backtracking driver.
//!
//! Each frame orders the legal moves for the current path and tries them in
//! turn, extending by one tile per attempt. Three things end a frame, checked
//! in this order:
//! 1. the path covers every tile — propagate it up, short-circuiting all
//!    remaining siblings at every ancestor;
//! 2. the iteration budget is spent — the deepest in-flight path propagates
//!    up unchanged (an exhaustion signal, not a failure);
//! 3. no legal move remains — backtrack, the parent tries its next sibling.
//!
//! On exhaustion the engine deliberately reports the path of the branch it
//! was in when the budget ran out, not the deepest path seen anywhere in the
//! tree. Recorded iteration statistics are compared across runs, so this
//! behavior is part of the contract. `max_depth` separately tracks the
//! longest path observed and is diagnostic only.
//!
//! Depth is bounded by the tile count, so native recursion is safe.

use tracing::{info, warn};

use crate::core::path::Path;
use crate::error::Result;
use crate::geometry::{MoveList, Rotation};
use crate::search::selector::{legal_moves, order_moves};

/// Iteration budget used when the environment does not provide one.
pub const DEFAULT_BUDGET: u64 = 1_000_000;

/// Counters owned by a single search invocation. Never shared; a batch run
/// constructs a fresh one per tile.
#[derive(Debug, Clone, Copy)]
pub struct RunState {
    pub iterations: u64,
    pub budget: u64,
    pub max_depth: usize,
}

impl RunState {
    pub fn new(budget: u64) -> Self {
        Self {
            iterations: 0,
            budget,
            max_depth: 0,
        }
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.iterations >= self.budget
    }
}

/// What one frame reports to its parent.
enum Probe {
    /// The path covers every tile.
    Complete(Path),
    /// Budget spent; carries the deepest in-flight path.
    Exhausted(Path),
    /// Dead end below this frame.
    Backtrack,
}

/// Final outcome of a run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Path,
    pub iterations: u64,
    pub max_depth: usize,
    pub success: bool,
}

/// Run the search to completion, budget exhaustion, or a fully explored tree.
///
/// Deterministic: identical (start, move list, rotation, budget) inputs
/// produce identical paths and iteration counts.
pub fn search(
    start: Path,
    list: &MoveList,
    rotation: Rotation,
    state: &mut RunState,
) -> Result<SearchOutcome> {
    state.max_depth = state.max_depth.max(start.len());
    let mut path = start;
    let probe = extend(&mut path, list, rotation, state)?;
    let (path, success) = match probe {
        Probe::Complete(p) => {
            info!(iterations = state.iterations, "complete tour found");
            (p, true)
        }
        Probe::Exhausted(p) => {
            warn!(
                budget = state.budget,
                depth = p.len(),
                max_depth = state.max_depth,
                "iteration budget exhausted"
            );
            (p, false)
        }
        // The whole tree below the start tile is a dead end; the path has
        // been rewound to the start tile alone.
        Probe::Backtrack => (path, false),
    };
    Ok(SearchOutcome {
        path,
        iterations: state.iterations,
        max_depth: state.max_depth,
        success,
    })
}

fn extend(
    path: &mut Path,
    list: &MoveList,
    rotation: Rotation,
    state: &mut RunState,
) -> Result<Probe> {
    if path.is_complete() {
        return Ok(Probe::Complete(path.clone()));
    }
    if state.exhausted() {
        return Ok(Probe::Exhausted(path.clone()));
    }

    let legal = legal_moves(path, list);
    let ordered = order_moves(path, legal, list, rotation)?;
    for mv in ordered {
        state.iterations += 1;
        let next = path.current() + mv;
        path.push(next);
        state.max_depth = state.max_depth.max(path.len());
        match extend(path, list, rotation, state)? {
            Probe::Complete(p) => return Ok(Probe::Complete(p)),
            Probe::Exhausted(p) => return Ok(Probe::Exhausted(p)),
            Probe::Backtrack => {
                path.pop();
            }
        }
    }
    Ok(Probe::Backtrack)
}
