//! Root-finding error types.
//!
//! [`RootFindingError`] : runtime errors shared by all methods
//! - non-finite function evaluation
//! - invalid tolerance or iteration cap
//! - iteration cap exhausted without convergence
//!
//! Method-specific failures (no sign change, vanishing derivative,
//! degenerate secant denominator) live in each algorithm module and
//! wrap [`RootFindingError`] transparently.

use thiserror::Error;

/// Runtime errors common to all root-finding algorithms.
///
/// Every failure is terminal: algorithms detect it locally, return it
/// to the caller, and never retry internally.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("no convergence after {iterations} iterations")]
    NonConvergence { iterations: usize },
}
