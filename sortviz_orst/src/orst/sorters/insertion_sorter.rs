use crate::orst::{cancelled, step, Sorter, StepObserver, TerminationReason};
use crate::{ArrayModel, Result};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time.
///
/// Sorting is done in-place, by iterating up the array, growing the sorted list behind it. At
/// each array-position, it holds the value there as the key and walks backwards through the
/// sorted list, shifting every larger value one slot to the right. The key is then written into
/// the gap that is left.
///
/// # Steps
///
/// Every shift is a step, and so is the final write of the key (even when nothing was shifted).
/// All steps of one position carry that position as boundary hint. A cancellation observed right
/// after a shift leaves the key unwritten, so the partial array holds one value twice.
///
/// # Usage
///```
/// use sortviz_orst::orst::{Callbacks, InsertionSorter, Sorter};
/// use sortviz_orst::ArrayModel;
///
/// let mut array = ArrayModel::from_vec(vec![1, 5, 4, 2, 3]).unwrap();
/// InsertionSorter
///     .sort(&mut array, &mut Callbacks::new(|_: &[i32], _: usize| {}, || false))
///     .unwrap();
/// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord + Clone,
{
    fn sort<O>(&self, array: &mut ArrayModel<T>, observer: &mut O) -> Result<TerminationReason>
    where
        O: StepObserver<T>,
    {
        for unsorted in 1..array.len() {
            if cancelled(observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }

            let key = array.get(unsorted)?.clone();
            let mut slot = unsorted;

            while slot > 0 && *array.get(slot - 1)? > key {
                let larger = array.get(slot - 1)?.clone();
                array.set(slot, larger)?;
                slot -= 1;

                if step(array, unsorted, observer).is_break() {
                    return Ok(TerminationReason::Cancelled);
                }
            }

            array.set(slot, key)?;
            if step(array, unsorted, observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }
        }

        Ok(TerminationReason::Completed)
    }
}
