use crate::orst::{cancelled, step, Sorter, StepObserver, TerminationReason};
use crate::{ArrayModel, Result};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortviz_orst::orst::{Callbacks, SelectionSorter, Sorter};
/// use sortviz_orst::ArrayModel;
///
/// let mut array = ArrayModel::from_vec(vec![1, 5, 4, 2, 3]).unwrap();
/// SelectionSorter
///     .sort(&mut array, &mut Callbacks::new(|_: &[i32], _: usize| {}, || false))
///     .unwrap();
/// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. The algorithm proceeds by finding the smallest
/// element in the unsorted sublist, swapping it with the
/// leftmost unsorted element, and moving the sublist
/// boundaries one element to the right.
///
/// # Steps
///
/// Scanning for the minimum polls for cancellation on every comparison but reports nothing.
/// Each position then gets exactly one swap step, even when the minimum is already in place, with
/// the position as boundary hint. The last position is never visited since a single remaining
/// element is already the minimum.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord + Clone,
{
    fn sort<O>(&self, array: &mut ArrayModel<T>, observer: &mut O) -> Result<TerminationReason>
    where
        O: StepObserver<T>,
    {
        let n = array.len();

        for unsorted in 0..n.saturating_sub(1) {
            if cancelled(observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }

            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..n {
                if cancelled(observer).is_break() {
                    return Ok(TerminationReason::Cancelled);
                }
                if array.get(i)? < array.get(smallest_in_rest)? {
                    smallest_in_rest = i;
                }
            }

            array.swap(unsorted, smallest_in_rest)?;
            if step(array, unsorted, observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }
        }

        Ok(TerminationReason::Completed)
    }
}
