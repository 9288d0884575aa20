use thiserror::Error;

/// Failure modes of a sort call.
///
/// `InvalidFraction` is a bad call: it is detected during validation, before
/// any element is read or moved. `Incomparable` is bad data: it surfaces
/// lazily, at the first comparison for which no order is defined. Both are
/// deterministic, so re-invoking with the same input reproduces them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SortError {
    /// The pending-item fraction was outside `(0, 1]`.
    #[error("pending_item_fraction must be within (0, 1], got {0}")]
    InvalidFraction(f64),

    /// Two input elements have no defined order (for floats, a NaN).
    #[error("input contains elements with no defined order")]
    Incomparable,
}
