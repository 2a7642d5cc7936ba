//! # raiz
//!
//! Scalar root finding for continuous functions `f: R -> R`.
//!
//! Three classical iterative methods are provided, each as a free
//! function over a caller-supplied evaluator closure:
//! - [`root_finding::bisection::bisection`] : bracketing, guaranteed convergence
//! - [`root_finding::newton::newton`]       : one-point, needs a derivative
//! - [`root_finding::secant::secant`]       : two-point, derivative-free
//!
//! Every successful run returns a [`root_finding::report::RootResult`]
//! carrying the approximate root together with an
//! [`root_finding::trace::IterationTrace`], the ordered per-iteration
//! convergence history `(iteration, error_estimate)`. The trace is what a
//! caller plots or prints; this crate itself performs no I/O.
//!
//! ```
//! use raiz::root_finding::bisection::bisection;
//! use raiz::root_finding::config::IterationCfg;
//!
//! let f = |x: f64| x * x * x - x - 2.0;
//! let res = bisection(f, 1.0, 2.0, 1e-6, IterationCfg::new()).unwrap();
//! assert!((res.root - 1.5213797).abs() < 1e-5);
//! assert!(res.trace.last().unwrap().error_estimate <= 1e-6);
//! ```

pub mod root_finding;

pub use root_finding::report::RootResult;
pub use root_finding::trace::{IterationRecord, IterationTrace};
