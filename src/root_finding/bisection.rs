//! Bisection method.

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{validate_tol, IterationCfg};
use super::errors::RootFindingError;
use super::report::RootResult;
use super::signs::sign_change;
use super::trace::IterationTrace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0")]
    NoSignChange { a: f64, b: f64 },
}

/// Calculates the midpoint of `[a, b]`.
#[inline]
fn calculate_midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Theoretical number of halvings until the bracket radius `(b - a)/2`
/// drops to `tol`, with one extra step of rounding slack.
///
/// The radius after iteration n is `(b - a) / 2^n`, so the bound is
/// `ceil(log2((b - a) / tol))`.
#[inline]
fn theoretical_iter(a: f64, b: f64, tol: f64) -> usize {
    let w0 = b - a;
    if w0 <= tol {
        1
    } else {
        ((w0 / tol).log2().ceil() as usize).saturating_add(1)
    }
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` with a true sign change,
/// `func(a) * func(b) < 0`, which guarantees a root inside the bracket.
/// The bracket halves every iteration, so convergence is guaranteed
/// within `ceil(log2((b - a)/tol))` steps.
///
/// # Arguments
/// - `func` : the function whose root is sought
/// - `a`    : lower bracket endpoint (expected `a < b`, not enforced)
/// - `b`    : upper bracket endpoint
/// - `tol`  : convergence threshold on the bracket radius; finite, > 0
/// - `cfg`  : [`IterationCfg`]; with `max_iter` unset the theoretical
///   bound is used, clamped to [`GLOBAL_MAX_ITER_FALLBACK`]
///
/// # Returns
/// [`RootResult`] with the final midpoint as `root` and one trace record
/// per iteration (indices from 1) carrying
/// `error_estimate = (b - a)/2`, the radius of the bracket the midpoint
/// was computed from. Iteration stops once the radius is `<= tol`, or
/// earlier on an exact hit `func(c) == 0`.
///
/// # Errors
/// - [`BisectionError::NoSignChange`] : `func(a) * func(b) >= 0`; checked
///   once before any iteration, so the trace never starts
///
/// Propagated via [`BisectionError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]    : `tol` <= 0 or non-finite
/// - [`RootFindingError::InvalidMaxIter`]      : `cfg.max_iter` == 0
/// - [`RootFindingError::NonConvergence`]      : iteration cap exhausted
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    tol: f64,
    cfg: IterationCfg,
) -> Result<RootResult, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    let tol = validate_tol(tol)?;

    let num_iter = match cfg.max_iter() {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None => theoretical_iter(a, b, tol).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // number of function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = {
            evals += 1;
            func(x)
        };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    // precondition: true sign change on [a, b]
    let mut fa = eval(a)?;
    let fb = eval(b)?;
    if !sign_change(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut trace = IterationTrace::new();

    for iter in 1..=num_iter {
        let midpoint = calculate_midpoint(a, b);
        // radius of the bracket the midpoint splits: a guaranteed bound
        // on |midpoint - root|, not a step size
        let radius = (b - a) * 0.5;
        trace.push(iter, radius);

        let fm = eval(midpoint)?;

        // exact hit
        if fm == 0.0 {
            return Ok(RootResult {
                root: midpoint,
                iterations: iter,
                evaluations: evals,
                trace,
                algorithm_name: ALGORITHM.algorithm_name(),
            });
        }

        // narrow the bracket; the sign-change invariant survives either
        // assignment because fm != 0 here
        if sign_change(fa, fm) {
            b = midpoint;
        } else {
            a = midpoint;
            fa = fm;
        }

        if radius <= tol {
            return Ok(RootResult {
                root: midpoint,
                iterations: iter,
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
