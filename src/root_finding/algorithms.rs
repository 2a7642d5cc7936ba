//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.

/// Hard cap applied when an automatically computed iteration count
/// (e.g. the bisection theoretical bound) would otherwise exceed it.
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;

/// All root-finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration cap if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Values are heuristic and method-specific.
    /// - [`Algorithm::Bisection`] returns `None`, meaning "compute the
    ///   theoretical bound instead"; if that bound exceeds practical
    ///   limits, [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bisection => None, // theoretical bound
            Algorithm::Newton    => Some(50),
            Algorithm::Secant    => Some(100),
        }
    }

    /// Algorithm name for the [`RootResult`] `algorithm_name` field.
    ///
    /// [`RootResult`]: super::report::RootResult
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
            Algorithm::Secant    => "secant",
        }
    }

    /// First trace index recorded by the method.
    ///
    /// Bisection and secant count iterations from 1; Newton counts from 0.
    pub const fn first_iteration_index(self) -> usize {
        match self {
            Algorithm::Bisection => 1,
            Algorithm::Newton    => 0,
            Algorithm::Secant    => 1,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
