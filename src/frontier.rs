use core::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::SortError;

/// Which end of the value range a run grows from.
///
/// Orientation only decides which side is cheap to extend. Traversal is
/// fixed: forward is always ascending, backward always descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Orientation {
    /// Grows upward, seeded with the global minimum.
    Ascending,
    /// Grows downward, seeded with the global maximum.
    Descending,
}

/// One monotonic run of the bifurcation.
///
/// The run stores slice positions, not elements, kept in ascending element
/// order. An `Ascending` run extends at the back and a `Descending` run at
/// the front, so a deque gives O(1) extension for both while the stored
/// order stays identical. Comparisons go through a position comparator
/// supplied by the caller, which also owns the trivial-append precondition:
/// `append` is only called with a position on the correct side of the
/// current frontier.
#[derive(Debug)]
pub(crate) struct FrontierRun {
    items: VecDeque<usize>,
    orientation: Orientation,
    frontier: usize,
}

impl FrontierRun {
    pub(crate) fn new(seed: usize, orientation: Orientation) -> Self {
        FrontierRun {
            items: VecDeque::from([seed]),
            orientation,
            frontier: seed,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Position of the most recently appended element.
    pub(crate) fn frontier(&self) -> usize {
        self.frontier
    }

    /// O(1) extension at the growth end.
    pub(crate) fn append(&mut self, pos: usize) {
        match self.orientation {
            Orientation::Ascending => self.items.push_back(pos),
            Orientation::Descending => self.items.push_front(pos),
        }
        self.frontier = pos;
    }

    /// Merges a batch of positions, in any order and of any size, into the
    /// run while preserving the traversal invariant. This is the expensive
    /// path: an upper-bound search plus a shifting insert per element.
    pub(crate) fn insert_batch<F>(&mut self, batch: &[usize], cmp: &mut F) -> Result<(), SortError>
    where
        F: FnMut(usize, usize) -> Result<Ordering, SortError>,
    {
        for &pos in batch {
            let at = self.upper_bound(pos, cmp)?;
            self.items.insert(at, pos);
        }

        // Later trivial appends test against the growth end, which the batch
        // may have changed.
        self.frontier = match self.orientation {
            Orientation::Ascending => self.items[self.items.len() - 1],
            Orientation::Descending => self.items[0],
        };

        Ok(())
    }

    /// Ascending traversal. Lazy, restartable, does not consume the run.
    pub(crate) fn iter_forward(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    /// Descending traversal. Same guarantees as [`Self::iter_forward`].
    pub(crate) fn iter_backward(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().rev().copied()
    }

    /// First index in the run whose element orders strictly after `pos`.
    fn upper_bound<F>(&self, pos: usize, cmp: &mut F) -> Result<usize, SortError>
    where
        F: FnMut(usize, usize) -> Result<Ordering, SortError>,
    {
        let mut lo = 0;
        let mut hi = self.items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if cmp(self.items[mid], pos)? == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Ok(lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp_in(values: &'_ [i32]) -> impl FnMut(usize, usize) -> Result<Ordering, SortError> + '_ {
        move |i, j| Ok(values[i].cmp(&values[j]))
    }

    fn forward_values(run: &FrontierRun, values: &[i32]) -> Vec<i32> {
        run.iter_forward().map(|pos| values[pos]).collect()
    }

    fn backward_values(run: &FrontierRun, values: &[i32]) -> Vec<i32> {
        run.iter_backward().map(|pos| values[pos]).collect()
    }

    #[test]
    fn ascending_appends_extend_the_back() {
        let values = [1, 3, 3, 9];
        let mut run = FrontierRun::new(0, Orientation::Ascending);
        run.append(1);
        run.append(2);
        run.append(3);

        assert_eq!(run.len(), 4);
        assert_eq!(run.frontier(), 3);
        assert_eq!(forward_values(&run, &values), [1, 3, 3, 9]);
        assert_eq!(backward_values(&run, &values), [9, 3, 3, 1]);
    }

    #[test]
    fn descending_appends_extend_the_front() {
        let values = [9, 7, 7, 2];
        let mut run = FrontierRun::new(0, Orientation::Descending);
        run.append(1);
        run.append(2);
        run.append(3);

        assert_eq!(run.frontier(), 3);
        // Forward traversal is ascending regardless of orientation.
        assert_eq!(forward_values(&run, &values), [2, 7, 7, 9]);
        assert_eq!(backward_values(&run, &values), [9, 7, 7, 2]);
    }

    #[test]
    fn traversal_is_restartable() {
        let values = [4, 6];
        let mut run = FrontierRun::new(0, Orientation::Ascending);
        run.append(1);

        assert_eq!(run.iter_forward().count(), 2);
        assert_eq!(forward_values(&run, &values), [4, 6]);
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn insert_batch_lands_in_order() {
        let values = [1, 10, 20, 15, 5, 12];
        let mut run = FrontierRun::new(0, Orientation::Ascending);
        run.append(1);
        run.append(2);

        let mut cmp = cmp_in(&values);
        run.insert_batch(&[3, 4, 5], &mut cmp).unwrap();

        assert_eq!(forward_values(&run, &values), [1, 5, 10, 12, 15, 20]);
        // The batch did not change the growth end.
        assert_eq!(run.frontier(), 2);
    }

    #[test]
    fn insert_batch_keeps_an_unchanged_edge() {
        let values = [10, 30, 40, 5];
        let mut run = FrontierRun::new(0, Orientation::Descending);
        run.append(3);

        let mut cmp = cmp_in(&values);
        run.insert_batch(&[1, 2], &mut cmp).unwrap();

        assert_eq!(forward_values(&run, &values), [5, 10, 30, 40]);
        // Descending runs keep their frontier at the smallest element.
        assert_eq!(run.frontier(), 3);
    }

    #[test]
    fn insert_batch_into_descending_updates_front_edge() {
        let values = [10, 30, 2, 5];
        let mut run = FrontierRun::new(0, Orientation::Descending);
        run.append(3);

        let mut cmp = cmp_in(&values);
        run.insert_batch(&[1, 2], &mut cmp).unwrap();

        assert_eq!(forward_values(&run, &values), [2, 5, 10, 30]);
        // 2 undercut the previous frontier element 5.
        assert_eq!(run.frontier(), 2);
    }

    #[test]
    fn insert_batch_into_ascending_updates_back_edge() {
        let values = [10, 50, 20, 60];
        let mut run = FrontierRun::new(0, Orientation::Ascending);
        run.append(1);

        let mut cmp = cmp_in(&values);
        run.insert_batch(&[2, 3], &mut cmp).unwrap();

        assert_eq!(forward_values(&run, &values), [10, 20, 50, 60]);
        // 60 outgrew the previous frontier element 50.
        assert_eq!(run.frontier(), 3);
    }
}
