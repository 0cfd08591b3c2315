//! Per-tile run orchestration: configuration resolution, search, console
//! report, and persistence.

use std::fmt::Write as _;
use std::path::Path as FsPath;

use chrono::Utc;
use tracing::info;

use crate::core::path::Path;
use crate::core::tile::Tile;
use crate::error::Result;
use crate::geometry::{Direction, MoveList, Rotation};
use crate::history;
use crate::search::engine::{search, RunState, SearchOutcome};
use crate::store::{ResultsStore, SearchRecord};

/// Caller-supplied configuration; either half may be left open.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunConfig {
    pub direction: Option<Direction>,
    pub rotation: Option<Rotation>,
}

/// Fully pinned-down configuration for one tile.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig {
    pub direction: Direction,
    pub rotation: Rotation,
    /// True when the history oracle chose the pair.
    pub from_oracle: bool,
}

/// Resolve a possibly-partial configuration for `tile`.
///
/// The oracle is consulted only when both halves are open; a half-specified
/// configuration takes fixed defaults (N / clockwise) for the missing half.
pub fn resolve_config(
    cfg: RunConfig,
    tile: Tile,
    store: &ResultsStore,
    budget: u64,
) -> ResolvedConfig {
    match (cfg.direction, cfg.rotation) {
        (None, None) => {
            let (direction, rotation) = history::select_default(tile, store, budget);
            ResolvedConfig {
                direction,
                rotation,
                from_oracle: true,
            }
        }
        (direction, rotation) => ResolvedConfig {
            direction: direction.unwrap_or(Direction::N),
            rotation: rotation.unwrap_or(Rotation::Clockwise),
            from_oracle: false,
        },
    }
}

/// Totals for a batch over several start tiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub attempted: usize,
    pub solved: usize,
    pub failed: usize,
}

fn format_path(path: &Path) -> String {
    let mut out = String::new();
    for (i, tile) in path.tiles().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "({tile})");
    }
    out
}

/// Run one tile: resolve the configuration, search, report, persist.
///
/// The record is written with `success:false` on budget exhaustion; an
/// exhausted run is a diagnostic, not an error. Store I/O failures propagate.
pub fn run_tile(
    tile: Tile,
    cfg: RunConfig,
    store: &mut ResultsStore,
    store_path: &FsPath,
    budget: u64,
) -> Result<SearchOutcome> {
    let suggestion = history::select_default(tile, store, budget);
    let resolved = resolve_config(cfg, tile, store, budget);

    println!(
        "tile {tile}: history suggests {}:{}",
        suggestion.0, suggestion.1
    );
    println!(
        "tile {tile}: searching direction={} rotation={}{}",
        resolved.direction,
        resolved.rotation,
        if resolved.from_oracle {
            " (oracle)"
        } else {
            ""
        }
    );
    info!(%tile, direction = %resolved.direction, rotation = %resolved.rotation, budget, "run start");

    let list = MoveList::for_direction(resolved.direction);
    let mut state = RunState::new(budget);
    let outcome = search(Path::new(tile), &list, resolved.rotation, &mut state)?;

    if outcome.success {
        println!(
            "tile {tile}: complete tour in {} iterations",
            outcome.iterations
        );
    } else {
        println!(
            "tile {tile}: no tour within budget {budget}: {} iterations, path length {} (max depth {})",
            outcome.iterations,
            outcome.path.len(),
            outcome.max_depth
        );
    }
    println!("tile {tile}: path {}", format_path(&outcome.path));

    store.insert(
        tile,
        resolved.direction,
        resolved.rotation,
        SearchRecord {
            iterations: outcome.iterations,
            success: outcome.success,
            path: outcome.path.tiles().iter().map(Tile::to_string).collect(),
            time: Utc::now(),
        },
    );
    store.save(store_path)?;

    Ok(outcome)
}

/// Run a batch of start tiles strictly sequentially.
///
/// One tile's failure is reported and the batch continues with the next tile.
pub fn run_batch(
    tiles: &[Tile],
    cfg: RunConfig,
    store_path: &FsPath,
    budget: u64,
) -> Result<BatchSummary> {
    let mut store = ResultsStore::load(store_path)?;
    let mut summary = BatchSummary {
        attempted: tiles.len(),
        ..BatchSummary::default()
    };
    for &tile in tiles {
        match run_tile(tile, cfg, &mut store, store_path, budget) {
            Ok(outcome) if outcome.success => summary.solved += 1,
            Ok(_) => {}
            Err(e) => {
                summary.failed += 1;
                eprintln!("tile {tile}: run failed: {e}");
            }
        }
    }
    Ok(summary)
}
