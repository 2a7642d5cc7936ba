//! Secant method.

use super::algorithms::Algorithm;
use super::config::{validate_tol, IterationCfg};
use super::errors::RootFindingError;
use super::report::RootResult;
use super::trace::IterationTrace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Secant;

/// Below this denominator magnitude `|f(x1) - f(x0)|` the secant line is
/// nearly horizontal and the run is aborted.
pub const DENOMINATOR_EPS: f64 = 1e-15;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("degenerate secant denominator: |f(x1) - f(x0)| = |{fx1} - {fx0}| < 1e-15")]
    ZeroSecantDenominator { fx0: f64, fx1: f64 },
}

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : the function whose root is sought
/// - `x0`   : first initial approximation
/// - `x1`   : second initial approximation; the pair need not bracket a
///   sign change, but equal guesses fail on the first iteration
/// - `tol`  : convergence threshold on the absolute step; finite, > 0
/// - `cfg`  : [`IterationCfg`]; with `max_iter` unset the cap defaults
///   to [`Algorithm::default_max_iter`] for secant (100)
///
/// # Returns
/// [`RootResult`] with the final iterate as `root` and one trace record
/// per iteration (indices from 1) carrying
/// `error_estimate = |x2 - x1|` (absolute step, not relative).
/// Iteration stops once the estimate drops below `tol`.
///
/// # Errors
/// - [`SecantError::ZeroSecantDenominator`] : `|func(x1) - func(x0)| < 1e-15`;
///   the secant step is numerically unstable
///
/// Propagated via [`SecantError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or non-finite
/// - [`RootFindingError::InvalidMaxIter`]      : `cfg.max_iter` == 0
/// - [`RootFindingError::NonConvergence`]      : iteration cap exhausted
///
/// # Notes
/// Function values are evaluated once per point and carried across the
/// window shift `(x0, x1) = (x1, x2)`; for the pure evaluators this
/// crate requires, that is observationally identical to re-evaluating.
///
/// # Warning
/// Poor initial guesses can diverge or stall until the cap trips. For
/// guaranteed convergence use a bracketed method ([`bisection`]).
///
/// [`bisection`]: super::bisection::bisection
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    tol: f64,
    cfg: IterationCfg,
) -> Result<RootResult, SecantError>
where
    F: FnMut(f64) -> f64,
{
    let tol = validate_tol(tol)?;
    let num_iter = cfg.resolve(ALGORITHM)?;

    let mut evals = 0;

    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = {
            evals += 1;
            func(x)
        };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut trace = IterationTrace::new();

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = eval(x_prev)?;
    let mut f_curr = eval(x_curr)?;

    for iter in 1..=num_iter {
        let denom = f_curr - f_prev;
        if denom.abs() < DENOMINATOR_EPS {
            return Err(SecantError::ZeroSecantDenominator {
                fx0: f_prev,
                fx1: f_curr,
            });
        }

        let x_next = x_curr - ((x_curr - x_prev) / denom) * f_curr;

        let error_estimate = (x_next - x_curr).abs();
        trace.push(iter, error_estimate);

        // shift the two-point window
        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = eval(x_curr)?;

        if error_estimate < tol {
            return Ok(RootResult {
                root: x_curr,
                iterations: trace.len(),
                evaluations: evals,
                trace,
                algorithm_name: ALGORITHM.algorithm_name(),
            });
        }
    }

    Err(RootFindingError::NonConvergence {
        iterations: num_iter,
    }
    .into())
}
