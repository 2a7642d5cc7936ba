//! Newton-Raphson method.

use super::algorithms::Algorithm;
use super::config::{validate_tol, IterationCfg};
use super::errors::RootFindingError;
use super::report::RootResult;
use super::trace::IterationTrace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Newton;

/// Below this magnitude the tangent step `-f(x)/df(x)` is numerically
/// unstable and the run is aborted.
pub const DERIVATIVE_EPS: f64 = 1e-15;

/// Below this iterate magnitude the relative step `|(x1 - x0)/x1|` is
/// unstable; the absolute step is recorded instead.
const ITERATE_EPS: f64 = 1e-15;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("derivative too small at x={x}: f'(x)={dfx}")]
    ZeroDerivative { x: f64, dfx: f64 },
}

/// Relative step size, falling back to the absolute step when the new
/// iterate sits too close to zero for the ratio to be meaningful.
#[inline]
fn step_error(x0: f64, x1: f64) -> f64 {
    if x1.abs() < ITERATE_EPS {
        (x1 - x0).abs()
    } else {
        ((x1 - x0) / x1).abs()
    }
}

/// Evaluates `f(x)` with a finiteness check, counting the call.
#[inline]
fn eval_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    let fx = {
        *evals += 1;
        f(x)
    };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// # Arguments
/// - `func`  : the function whose root is sought
/// - `dfunc` : its derivative, supplied by the caller (analytic,
///   finite-difference, anything satisfying the closure contract)
/// - `x0`    : initial guess
/// - `tol`   : convergence threshold on the relative step; finite, > 0
/// - `cfg`   : [`IterationCfg`]; with `max_iter` unset the cap defaults
///   to [`Algorithm::default_max_iter`] for Newton (50)
///
/// # Returns
/// [`RootResult`] with the final iterate as `root` and one trace record
/// per iteration (indices from 0) carrying
/// `error_estimate = |(x1 - x0)/x1|`. Iteration stops once the estimate
/// drops below `tol`. `evaluations` counts `func` and `dfunc` calls
/// together.
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : `|dfunc(x)| < 1e-15`; the tangent
///   step is undefined or unstable
///
/// Propagated via [`NewtonError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func`/`dfunc` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or non-finite
/// - [`RootFindingError::InvalidMaxIter`]      : `cfg.max_iter` == 0
/// - [`RootFindingError::NonConvergence`]      : iteration cap exhausted
///
/// # Warning
/// Convergence is local only: a poor guess (e.g. near an extremum of
/// `func`) can cycle or diverge until the cap trips. For guaranteed
/// convergence use a bracketed method ([`bisection`]).
///
/// [`bisection`]: super::bisection::bisection
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    tol: f64,
    cfg: IterationCfg,
) -> Result<RootResult, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let tol = validate_tol(tol)?;
    let num_iter = cfg.resolve(ALGORITHM)?;

    let mut evals = 0;
    let mut trace = IterationTrace::new();
    let mut x = x0;

    for iter in 0..num_iter {
        let dfx = eval_checked(&mut dfunc, x, &mut evals)?;
        if dfx.abs() < DERIVATIVE_EPS {
            return Err(NewtonError::ZeroDerivative { x, dfx });
        }

        let fx = eval_checked(&mut func, x, &mut evals)?;
        let x_next = x - fx / dfx;

        let error_estimate = step_error(x, x_next);
        trace.push(iter, error_estimate);

        x = x_next;

        if error_estimate < tol {
            return Ok(RootResult {
                root: x,
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
