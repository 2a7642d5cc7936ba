//! Shared configuration for root-finding algorithms.
//!
//! Provides [`IterationCfg`], the per-call iteration budget used by all
//! three methods. The convergence tolerance itself is an explicit solver
//! argument because its meaning differs per method (bracket radius for
//! bisection, relative step for Newton, absolute step for secant).

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::RootFindingError;

/// Iteration budget for a single solver run.
///
/// # Defaults
/// With `max_iter` unset, each solver resolves its cap via
/// [`Algorithm::default_max_iter`]; bisection computes its theoretical
/// bound instead, clamped to [`GLOBAL_MAX_ITER_FALLBACK`].
///
/// # Validation
/// `max_iter = 0` is rejected inside the solver with
/// [`RootFindingError::InvalidMaxIter`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct IterationCfg {
    max_iter: Option<usize>,
}

impl IterationCfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self {
        self.max_iter = Some(v);
        self
    }

    #[inline]
    #[must_use]
    pub fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }

    /// Resolve the effective iteration cap for `algorithm`.
    ///
    /// Not used by bisection, which substitutes its theoretical bound
    /// when `max_iter` is unset.
    pub(crate) fn resolve(&self, algorithm: Algorithm) -> Result<usize, RootFindingError> {
        match self.max_iter {
            Some(0) => Err(RootFindingError::InvalidMaxIter { got: 0 }),
            Some(v) => Ok(v),
            None => Ok(algorithm
                .default_max_iter()
                .unwrap_or(GLOBAL_MAX_ITER_FALLBACK)),
        }
    }
}

/// Validates a caller-supplied convergence tolerance.
///
/// All solvers require `tol` finite and strictly positive.
pub(crate) fn validate_tol(tol: f64) -> Result<f64, RootFindingError> {
    if !(tol.is_finite() && tol > 0.0) {
        return Err(RootFindingError::InvalidTolerance { got: tol });
    }
    Ok(tol)
}
