use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leaper_tour::core::tile::{Tile, BOARD_SIZE};
use leaper_tour::error::Result;
use leaper_tour::geometry::{Direction, Rotation};
use leaper_tour::run::{run_batch, RunConfig};
use leaper_tour::search::engine::DEFAULT_BUDGET;

/// Search for leaper tours of the 10×10 board.
#[derive(Debug, Parser)]
#[command(name = "tour")]
struct Args {
    /// Start tile as "x,y", or "all" to sweep every tile.
    #[arg(default_value = "all")]
    tile: String,

    /// Initial facing direction (N, NE, E, SE, S, SW, W, NW).
    #[arg(long)]
    direction: Option<Direction>,

    /// Move-ordering rotation (clockwise or anticlockwise).
    #[arg(long)]
    rotation: Option<Rotation>,

    /// Results store file.
    #[arg(long, default_value = "results.json")]
    results: PathBuf,

    /// Iteration budget per tile run.
    #[arg(long, env = "TOUR_ITERATION_BUDGET", default_value_t = DEFAULT_BUDGET)]
    budget: u64,
}

fn selected_tiles(selector: &str) -> Result<Vec<Tile>> {
    if selector.eq_ignore_ascii_case("all") {
        let mut tiles = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                tiles.push(Tile::new(x, y));
            }
        }
        return Ok(tiles);
    }
    Ok(vec![selector.parse()?])
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let tiles = match selected_tiles(&args.tile) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let cfg = RunConfig {
        direction: args.direction,
        rotation: args.rotation,
    };

    match run_batch(&tiles, cfg, &args.results, args.budget) {
        Ok(summary) => {
            println!(
                "{} of {} tiles toured ({} runs failed)",
                summary.solved, summary.attempted, summary.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("tour failed: {e}");
            ExitCode::FAILURE
        }
    }
}
