//! Depth-first tour search: legal-move selection and the backtracking driver.

pub mod engine;
pub mod selector;
