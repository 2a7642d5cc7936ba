//! Convergence-trace types shared by all root-finding algorithms.
//!
//! A run appends one [`IterationRecord`] per completed loop iteration;
//! the finished [`IterationTrace`] is the ordered convergence history a
//! caller can print or plot (error estimate against iteration index).

/// One completed loop iteration: its index and the error estimate
/// computed from the state that produced it.
///
/// The meaning of `error_estimate` is method-specific:
/// - bisection : bracket radius `(b - a)/2`, a guaranteed error bound
/// - newton    : relative step `|(x1 - x0)/x1|`
/// - secant    : absolute step `|x2 - x1|`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub error_estimate: f64,
}

/// Ordered convergence history of a single solver run.
///
/// Insertion order is significant. The trace grows monotonically while
/// the run is in progress and is frozen once the solver returns; there
/// are no public mutators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationTrace {
    records: Vec<IterationRecord>,
}

impl IterationTrace {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, iteration: usize, error_estimate: f64) {
        self.records.push(IterationRecord {
            iteration,
            error_estimate,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a IterationTrace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
