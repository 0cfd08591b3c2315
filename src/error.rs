use thiserror::Error;

use crate::core::tile::Tile;

/// Structured errors surfaced by tour runs.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("unknown direction label: {0}")]
    UnknownDirection(String),

    #[error("unknown rotation label: {0}")]
    UnknownRotation(String),

    #[error("invalid tile '{0}': expected \"x,y\" with 0 <= x,y <= 9")]
    InvalidTile(String),

    /// The displacement between the last two path tiles matches no move in
    /// the current move list. Indicates a geometry/config mismatch; never
    /// silently degraded to an empty move list.
    #[error("no move matches the displacement ({dx},{dy}) from {from} to {to}")]
    UnmatchedDisplacement {
        from: Tile,
        to: Tile,
        dx: i32,
        dy: i32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TourError>;
