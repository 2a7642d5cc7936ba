//! Sign utilities for root-finding algorithms.

/// Returns `true` if `fu` and `fv` straddle zero: `fu * fv < 0`.
///
/// A zero value at either point is not a sign change.
#[inline]
pub(crate) fn sign_change(fu: f64, fv: f64) -> bool {
    fu * fv < 0.0
}
