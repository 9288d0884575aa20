use core::cmp::Ordering;

use crate::error::SortError;
use crate::frontier::{FrontierRun, Orientation};

/// Builds the two monotonic runs for a slice of `len` elements, compared
/// through the position comparator `cmp`.
///
/// One pass finds the extremes, which seed an ascending run (from the
/// minimum) and a descending run (from the maximum). A second pass routes
/// every remaining position: extend whichever frontier accepts it in O(1),
/// or park it in the pending buffer. The buffer is drained with a batched
/// insertion whenever it reaches `flush_len`, and once more after the pass.
///
/// Returns `None` when the minimum equals the maximum; the input is already
/// sorted in both directions and no runs are needed.
pub(crate) fn classify<F>(
    len: usize,
    flush_len: usize,
    cmp: &mut F,
) -> Result<Option<(FrontierRun, FrontierRun)>, SortError>
where
    F: FnMut(usize, usize) -> Result<Ordering, SortError>,
{
    debug_assert!(len >= 2);
    debug_assert!(flush_len >= 1);

    // The first occurrence wins on duplicated extremes.
    let mut min_pos = 0;
    let mut max_pos = 0;
    for i in 1..len {
        if cmp(i, min_pos)? == Ordering::Less {
            min_pos = i;
        } else if cmp(i, max_pos)? == Ordering::Greater {
            max_pos = i;
        }
    }

    // All elements equal: any order of the input is sorted.
    if cmp(min_pos, max_pos)? == Ordering::Equal {
        return Ok(None);
    }

    let mut asc = FrontierRun::new(min_pos, Orientation::Ascending);
    let mut dsc = FrontierRun::new(max_pos, Orientation::Descending);
    let mut pending = Vec::new();

    for i in 0..len {
        if i == min_pos || i == max_pos {
            continue;
        }

        let extends_asc = cmp(i, asc.frontier())? != Ordering::Less;
        let extends_dsc = cmp(i, dsc.frontier())? != Ordering::Greater;

        if extends_asc && extends_dsc {
            // Either run accepts it: feed the shorter one so the final merge
            // works on balanced inputs.
            shorter(&mut asc, &mut dsc).append(i);
        } else if extends_asc {
            asc.append(i);
        } else if extends_dsc {
            dsc.append(i);
        } else {
            // Strictly between the two frontiers once they have crossed;
            // neither run can take it in O(1).
            pending.push(i);
            if pending.len() >= flush_len {
                shorter(&mut asc, &mut dsc).insert_batch(&pending, cmp)?;
                pending.clear();
            }
        }
    }

    if !pending.is_empty() {
        shorter(&mut asc, &mut dsc).insert_batch(&pending, cmp)?;
    }

    Ok(Some((asc, dsc)))
}

/// The run with fewer elements; ties go to the ascending run.
fn shorter<'a>(asc: &'a mut FrontierRun, dsc: &'a mut FrontierRun) -> &'a mut FrontierRun {
    if asc.len() <= dsc.len() {
        asc
    } else {
        dsc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_values(values: &[i32], flush_len: usize) -> Option<(FrontierRun, FrontierRun)> {
        let mut cmp = |i: usize, j: usize| Ok::<_, SortError>(values[i].cmp(&values[j]));
        classify(values.len(), flush_len, &mut cmp).unwrap()
    }

    fn run_values(run: &FrontierRun, values: &[i32]) -> Vec<i32> {
        run.iter_forward().map(|pos| values[pos]).collect()
    }

    #[test]
    fn seeds_and_routes() {
        let values = [5, 2, 8, 1, 9];
        let (asc, dsc) = classify_values(&values, 6).unwrap();

        // 5 is both-eligible and lands in the (tied, hence ascending) run,
        // 2 only fits under the descending frontier, 8 only above the
        // ascending one.
        assert_eq!(run_values(&asc, &values), [1, 5, 8]);
        assert_eq!(run_values(&dsc, &values), [2, 9]);
    }

    #[test]
    fn all_equal_short_circuits() {
        assert!(classify_values(&[5, 5, 5, 5], 6).is_none());
    }

    #[test]
    fn two_distinct_elements_split_into_seeds() {
        let values = [2, 1];
        let (asc, dsc) = classify_values(&values, 6).unwrap();
        assert_eq!(run_values(&asc, &values), [1]);
        assert_eq!(run_values(&dsc, &values), [2]);
    }

    #[test]
    fn pending_band_is_flushed() {
        // 10 raises the ascending frontier, 2 lowers the descending one;
        // 5 then extends neither and must take the batched path.
        let values = [1, 10, 2, 5, 200];
        let (asc, dsc) = classify_values(&values, 1).unwrap();

        assert_eq!(run_values(&asc, &values), [1, 5, 10]);
        assert_eq!(run_values(&dsc, &values), [2, 200]);
    }

    #[test]
    fn final_flush_drains_leftover_pending() {
        // flush_len is larger than the pending count, so only the
        // unconditional end-of-scan flush can place 5 and 6.
        let values = [1, 10, 2, 5, 6, 200];
        let (asc, dsc) = classify_values(&values, 100).unwrap();

        let mut all: Vec<i32> = run_values(&asc, &values);
        all.extend(run_values(&dsc, &values));
        all.sort();
        assert_eq!(all, [1, 2, 5, 6, 10, 200]);
        assert_eq!(asc.len() + dsc.len(), values.len());
    }

    #[test]
    fn runs_cover_every_position_once() {
        let values = [3, 7, 3, 1, 9, 4, 4, 8, 2, 6];
        let (asc, dsc) = classify_values(&values, 2).unwrap();

        let mut seen: Vec<usize> = asc.iter_forward().chain(dsc.iter_forward()).collect();
        seen.sort();
        assert_eq!(seen.len(), values.len());
        assert!(seen.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn comparison_failure_is_propagated() {
        let mut cmp = |_i: usize, _j: usize| Err::<Ordering, _>(SortError::Incomparable);
        assert_eq!(classify(3, 6, &mut cmp).unwrap_err(), SortError::Incomparable);
    }
}
