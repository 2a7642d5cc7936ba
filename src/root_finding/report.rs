//! Defines the [`RootResult`] struct returned by all
//! root-finding algorithms on success.

use super::trace::IterationTrace;

/// Successful outcome of a root-finding run.
///
/// [`RootResult`]
/// - `root`           : approximate root location
/// - `iterations`     : number of loop iterations performed
/// - `evaluations`    : total function (and derivative) evaluations
/// - `trace`          : per-iteration convergence history
/// - `algorithm_name` : algorithm name (e.g. `"bisection"`)
///
/// Failures are returned as the `Err` arm of each solver's `Result` and
/// carry no trace.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    pub root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub trace: IterationTrace,
    pub algorithm_name: &'static str,
}

impl RootResult {
    /// Error estimate recorded by the final iteration, if any.
    #[must_use]
    pub fn final_error(&self) -> Option<f64> {
        self.trace.last().map(|r| r.error_estimate)
    }
}
