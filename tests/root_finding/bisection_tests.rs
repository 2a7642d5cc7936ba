//! tests for the bisection root-finding algorithm
use approx::assert_relative_eq;
use raiz::root_finding::bisection::{bisection, BisectionError};
use raiz::root_finding::config::IterationCfg;
use raiz::root_finding::errors::RootFindingError;

type TestResult = Result<(), BisectionError>;

// real root of x^3 - x - 2
const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

#[test]
fn finds_cubic_root_on_unit_bracket() -> TestResult {
    let tol = 1e-6;
    let res = bisection(cubic, 1.0, 2.0, tol, IterationCfg::new())?;

    assert_relative_eq!(res.root, CUBIC_ROOT, epsilon = 2e-6);
    assert!(res.final_error().unwrap() <= tol);
    assert_eq!(res.iterations, res.trace.len());
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn radius_halves_exactly_on_dyadic_bracket() -> TestResult {
    // [1, 2] keeps every endpoint a dyadic rational, so each recorded
    // radius is exactly half the previous one
    let res = bisection(cubic, 1.0, 2.0, 1e-6, IterationCfg::new())?;
    let recs = res.trace.records();

    assert_eq!(recs[0].error_estimate, 0.5);
    for pair in recs.windows(2) {
        assert_eq!(pair[1].error_estimate, pair[0].error_estimate * 0.5);
    }
    Ok(())
}

#[test]
fn trace_indices_are_contiguous_from_one() -> TestResult {
    let res = bisection(cubic, 1.0, 2.0, 1e-6, IterationCfg::new())?;

    for (k, rec) in res.trace.iter().enumerate() {
        assert_eq!(rec.iteration, k + 1);
    }
    Ok(())
}

#[test]
fn no_sign_change_fails_before_iterating() -> TestResult {
    let f = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, 1e-6, IterationCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a: -1.0, b: 1.0 }));
    Ok(())
}

#[test]
fn zero_endpoint_is_not_a_sign_change() -> TestResult {
    // f(a) == 0 makes the product zero, which fails the strict test
    let f = |x: f64| x;
    let err = bisection(f, 0.0, 5.0, 1e-6, IterationCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a: 0.0, b: 5.0 }));
    Ok(())
}

#[test]
fn exact_midpoint_hit_stops_early() -> TestResult {
    let f = |x: f64| x;
    let res = bisection(f, -1.0, 1.0, 1e-6, IterationCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.trace.records()[0].error_estimate, 1.0);
    Ok(())
}

#[test]
fn iteration_cap_trips_as_non_convergence() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let cfg = IterationCfg::new().with_max_iter(5);
    let err = bisection(f, 0.0, 2.0, 1e-300, cfg).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonConvergence { iterations: 5 })
    ));
    Ok(())
}

#[test]
fn rejects_non_positive_tolerance() -> TestResult {
    let err = bisection(cubic, 1.0, 2.0, 0.0, IterationCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::InvalidTolerance { got }) if got == 0.0
    ));

    let err = bisection(cubic, 1.0, 2.0, f64::NAN, IterationCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::InvalidTolerance { .. })
    ));
    Ok(())
}

#[test]
fn rejects_zero_max_iter() -> TestResult {
    let cfg = IterationCfg::new().with_max_iter(0);
    let err = bisection(cubic, 1.0, 2.0, 1e-6, cfg).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::InvalidMaxIter { got: 0 })
    ));
    Ok(())
}

#[test]
fn non_finite_evaluation_is_reported() -> TestResult {
    let f = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, 1e-6, IterationCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
            if x == -1.0 && fx.is_nan()
    ));
    Ok(())
}

#[test]
fn counts_endpoint_and_midpoint_evaluations() -> TestResult {
    let res = bisection(cubic, 1.0, 2.0, 1e-6, IterationCfg::new())?;
    // both endpoints once, then one midpoint per iteration
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}
