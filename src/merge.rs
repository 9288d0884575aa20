use core::cmp::Ordering;

use crate::error::SortError;
use crate::frontier::FrontierRun;

/// Two-way merge of both runs into the output order, built left to right.
///
/// For ascending output both forward traversals are merged; for descending
/// output both backward traversals. Ties are taken from the ascending run's
/// cursor. The result is a permutation of slice positions: entry `k` names
/// the position whose element belongs at output slot `k`.
pub(crate) fn merge<F>(
    asc: &FrontierRun,
    dsc: &FrontierRun,
    reverse: bool,
    cmp: &mut F,
) -> Result<Vec<usize>, SortError>
where
    F: FnMut(usize, usize) -> Result<Ordering, SortError>,
{
    let mut order = Vec::with_capacity(asc.len() + dsc.len());

    if reverse {
        merge_runs(&mut order, asc.iter_backward(), dsc.iter_backward(), &mut |a, d| {
            Ok(cmp(a, d)? != Ordering::Less)
        })?;
    } else {
        merge_runs(&mut order, asc.iter_forward(), dsc.iter_forward(), &mut |a, d| {
            Ok(cmp(a, d)? != Ordering::Greater)
        })?;
    }

    Ok(order)
}

fn merge_runs<A, D, F>(
    out: &mut Vec<usize>,
    mut asc: A,
    mut dsc: D,
    take_asc: &mut F,
) -> Result<(), SortError>
where
    A: Iterator<Item = usize>,
    D: Iterator<Item = usize>,
    F: FnMut(usize, usize) -> Result<bool, SortError>,
{
    let mut a = asc.next();
    let mut d = dsc.next();

    while let (Some(x), Some(y)) = (a, d) {
        if take_asc(x, y)? {
            out.push(x);
            a = asc.next();
        } else {
            out.push(y);
            d = dsc.next();
        }
    }

    // One cursor is exhausted; drain the other.
    if let Some(x) = a {
        out.push(x);
        out.extend(asc);
    }
    if let Some(y) = d {
        out.push(y);
        out.extend(dsc);
    }

    Ok(())
}

/// Applies `order` to `v` in place.
///
/// Standard cycle chasing, as `slice::sort_by_cached_key` does it: slots
/// below `i` are already final, so an entry pointing into that region is
/// forwarded to wherever its element was swapped. No comparisons happen
/// here, so a panicking or failing comparator can never leave `v` partially
/// permuted.
pub(crate) fn write_back<T>(v: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(v.len(), order.len());

    for i in 0..order.len() {
        let mut src = order[i];
        while src < i {
            src = order[src];
        }
        order[i] = src;
        v.swap(i, src);
    }
}

/// The copy-variant writeback: clone into a fresh buffer, left to right.
pub(crate) fn write_copy<T: Clone>(v: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&pos| v[pos].clone()).collect()
}
