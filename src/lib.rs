//! Bifurcated insertion sort.
//!
//! The sort grows two monotonic runs at once: an ascending run seeded with
//! the global minimum and a descending run seeded with the global maximum.
//! Each element either extends one of the two frontiers in O(1) or is parked
//! in a bounded pending buffer, which is drained into the currently shorter
//! run with a batched insertion. A final two-way merge of the runs produces
//! the output.
//!
//! Splitting the cheap frontier extension from the expensive batched
//! insertion is the central bet of the algorithm: inputs dominated by
//! monotonic stretches ride the O(1) path almost everywhere, while inputs
//! concentrated in the band between the two frontiers degrade toward the
//! batched insertion's quadratic worst case. The
//! [`pending_item_fraction`](SortOptions::pending_item_fraction) knob trades
//! flush frequency against batch size inside that regime; it never affects
//! the result, only the work done to get there.
//!
//! ```
//! let mut data = vec![5, 2, 8, 1, 9];
//! bifurcated_sort::sort(&mut data);
//! assert_eq!(data, [1, 2, 5, 8, 9]);
//! ```
//!
//! The copy variants ([`sorted`], [`sorted_with`]) leave their input
//! untouched; [`sort_partial`] covers element types that are only
//! [`PartialOrd`] and reports the first undefined comparison as an error.

use core::cmp::Ordering;

mod classify;
mod error;
mod frontier;
mod merge;

pub use error::SortError;

/// Default fraction of the input length used as the pending-buffer flush
/// threshold.
pub const DEFAULT_PENDING_ITEM_FRACTION: f64 = 0.55;

// Floor for the pending-buffer flush threshold, so short inputs (where
// `len * fraction` truncates toward zero) still flush in batches.
const MIN_FLUSH_LEN: usize = 6;

/// Tuning and direction options for the `*_with` entry points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortOptions {
    /// Fraction of the input length, in `(0, 1]`, at which the pending
    /// buffer is flushed. Lower values flush eagerly in small batches,
    /// higher values flush rarely in large ones.
    pub pending_item_fraction: f64,
    /// Sort into non-increasing instead of non-decreasing order.
    pub reverse: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            pending_item_fraction: DEFAULT_PENDING_ITEM_FRACTION,
            reverse: false,
        }
    }
}

/// Sorts `v` in place in ascending order.
pub fn sort<T: Ord>(v: &mut [T]) {
    match sort_slice(v, &SortOptions::default(), &mut |a: &T, b: &T| Ok(a.cmp(b))) {
        Ok(()) => {}
        // Default options are valid and `Ord` is total.
        Err(_) => unreachable!(),
    }
}

/// Sorts `v` in place with a caller-supplied total order.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match sort_slice(v, &SortOptions::default(), &mut |a: &T, b: &T| {
        Ok(compare(a, b))
    }) {
        Ok(()) => {}
        Err(_) => unreachable!(),
    }
}

/// Sorts `v` in place with explicit [`SortOptions`].
///
/// # Errors
///
/// [`SortError::InvalidFraction`] if `options.pending_item_fraction` is
/// outside `(0, 1]`; validation runs before any element is moved, so `v` is
/// untouched on error.
pub fn sort_with<T: Ord>(v: &mut [T], options: &SortOptions) -> Result<(), SortError> {
    sort_slice(v, options, &mut |a: &T, b: &T| Ok(a.cmp(b)))
}

/// Sorts a [`PartialOrd`] slice in place in ascending order.
///
/// # Errors
///
/// [`SortError::Incomparable`] at the first comparison with no defined
/// order (for floats, whenever a NaN is involved). The error is detected
/// while the runs are still being planned and `v` has not been permuted, so
/// the slice is left in its original order.
pub fn sort_partial<T: PartialOrd>(v: &mut [T]) -> Result<(), SortError> {
    sort_slice(v, &SortOptions::default(), &mut |a: &T, b: &T| {
        a.partial_cmp(b).ok_or(SortError::Incomparable)
    })
}

/// Returns an ascending sorted copy of `v`, leaving `v` untouched.
pub fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    match sorted_slice(v, &SortOptions::default(), &mut |a: &T, b: &T| Ok(a.cmp(b))) {
        Ok(out) => out,
        Err(_) => unreachable!(),
    }
}

/// Returns a sorted copy of `v` under explicit [`SortOptions`], leaving `v`
/// untouched.
///
/// # Errors
///
/// [`SortError::InvalidFraction`] under the same conditions as
/// [`sort_with`].
pub fn sorted_with<T: Ord + Clone>(v: &[T], options: &SortOptions) -> Result<Vec<T>, SortError> {
    sorted_slice(v, options, &mut |a: &T, b: &T| Ok(a.cmp(b)))
}

fn sort_slice<T, C>(v: &mut [T], options: &SortOptions, compare: &mut C) -> Result<(), SortError>
where
    C: FnMut(&T, &T) -> Result<Ordering, SortError>,
{
    if let Some(order) = plan(v, options, compare)? {
        merge::write_back(v, order);
    }
    Ok(())
}

fn sorted_slice<T, C>(v: &[T], options: &SortOptions, compare: &mut C) -> Result<Vec<T>, SortError>
where
    T: Clone,
    C: FnMut(&T, &T) -> Result<Ordering, SortError>,
{
    match plan(v, options, compare)? {
        Some(order) => Ok(merge::write_copy(v, &order)),
        None => Ok(v.to_vec()),
    }
}

/// Classifies `v` and merges the resulting runs into the output order, or
/// `None` when the input is trivially sorted (length <= 1 or all elements
/// equal).
fn plan<T, C>(
    v: &[T],
    options: &SortOptions,
    compare: &mut C,
) -> Result<Option<Vec<usize>>, SortError>
where
    C: FnMut(&T, &T) -> Result<Ordering, SortError>,
{
    // Fail fast on a bad call, even for trivial inputs.
    let flush_len = flush_len(v.len(), options.pending_item_fraction)?;

    if v.len() <= 1 {
        return Ok(None);
    }

    let mut cmp = |i: usize, j: usize| compare(&v[i], &v[j]);
    match classify::classify(v.len(), flush_len, &mut cmp)? {
        Some((asc, dsc)) => Ok(Some(merge::merge(&asc, &dsc, options.reverse, &mut cmp)?)),
        None => Ok(None),
    }
}

fn flush_len(len: usize, fraction: f64) -> Result<usize, SortError> {
    // The negated form also rejects NaN.
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(SortError::InvalidFraction(fraction));
    }
    Ok(((len as f64 * fraction) as usize).max(MIN_FLUSH_LEN))
}
