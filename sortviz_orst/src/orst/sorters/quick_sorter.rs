use std::ops::Range;

use crate::orst::{cancelled, step, Sorter, StepObserver, TerminationReason};
use crate::{ArrayModel, Result};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortviz_orst::orst::{Callbacks, QuickSorter, Sorter};
/// use sortviz_orst::ArrayModel;
///
/// let mut array = ArrayModel::from_vec(vec![1, 5, 4, 2, 3]).unwrap();
/// QuickSorter
///     .sort(&mut array, &mut Callbacks::new(|_: &[i32], _: usize| {}, || false))
///     .unwrap();
/// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot.
///
/// This version never recurses. Pending ranges live on an explicit stack seeded with the whole
/// array, and each popped range is partitioned with the Lomuto scheme using its last element as
/// the pivot. The left part is pushed before the right part, so the right part is sorted first.
///
/// # Steps
///
/// Every swap during a partition is a step hinting at the slot that received the smaller value.
/// Placing the pivot is a step hinting at the pivot's final index. After the stack empties, one
/// last step hints at the full length, marking the whole array as settled.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl<T> Sorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    fn sort<O>(&self, array: &mut ArrayModel<T>, observer: &mut O) -> Result<TerminationReason>
    where
        O: StepObserver<T>,
    {
        let n = array.len();
        let mut stack: Vec<Range<usize>> = vec![0..n];

        while let Some(range) = stack.pop() {
            // nothing to partition
            if range.len() < 2 {
                continue;
            }
            if cancelled(observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }

            let (low, high) = (range.start, range.end - 1);
            let pivot = array.get(high)?.clone();

            // next slot for a value smaller than the pivot
            let mut slot = low;
            for j in low..high {
                if cancelled(observer).is_break() {
                    return Ok(TerminationReason::Cancelled);
                }
                if *array.get(j)? < pivot {
                    array.swap(slot, j)?;
                    if step(array, slot, observer).is_break() {
                        return Ok(TerminationReason::Cancelled);
                    }
                    slot += 1;
                }
            }

            array.swap(slot, high)?;
            if step(array, slot, observer).is_break() {
                return Ok(TerminationReason::Cancelled);
            }

            stack.push(low..slot);
            stack.push(slot + 1..range.end);
        }

        if n > 1 {
            observer.on_step(array.as_slice(), n);
        }

        Ok(TerminationReason::Completed)
    }
}
