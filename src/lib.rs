//! Exhaustive-move-order search for leaper tours of a 10×10 board.
//!
//! Eight fixed jump vectors (length-3 orthogonal, (±2,±2) diagonal) form a
//! closed angular ring. The engine extends a path depth-first, ordering
//! candidate moves by angular proximity to the previous move under a
//! clockwise or anticlockwise rotation policy, within an iteration budget.
//! Prior runs are persisted to a results store and feed a history oracle
//! that suggests a promising starting configuration per tile.

pub mod core;
pub mod error;
pub mod geometry;
pub mod history;
pub mod run;
pub mod search;
pub mod store;
