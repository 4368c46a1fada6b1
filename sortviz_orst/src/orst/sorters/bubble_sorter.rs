use crate::orst::{cancelled, step, Sorter, StepObserver, TerminationReason};
use crate::{ArrayModel, Result};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortviz_orst::orst::{BubbleSorter, Callbacks, Sorter};
/// use sortviz_orst::ArrayModel;
///
/// let mut array = ArrayModel::from_vec(vec![1, 5, 4, 2, 3]).unwrap();
/// BubbleSorter
///     .sort(&mut array, &mut Callbacks::new(|_: &[i32], _: usize| {}, || false))
///     .unwrap();
/// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The algorithm is
/// named for the way larger elements "bubble" to the end
/// of the list.
///
/// # Steps
///
/// Pass `i` makes `n - 1 - i` comparisons. Every swap is a step whose boundary hint is the lower
/// of the two swapped indices. Cancellation is polled before each comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord + Clone,
{
    fn sort<O>(&self, array: &mut ArrayModel<T>, observer: &mut O) -> Result<TerminationReason>
    where
        O: StepObserver<T>,
    {
        let n = array.len();

        for pass in 0..n {
            for j in 0..(n - pass - 1) {
                if cancelled(observer).is_break() {
                    return Ok(TerminationReason::Cancelled);
                }

                // strict, so equal neighbours never trade places
                if array.get(j)? > array.get(j + 1)? {
                    array.swap(j, j + 1)?;
                    if step(array, j, observer).is_break() {
                        return Ok(TerminationReason::Cancelled);
                    }
                }
            }
        }

        Ok(TerminationReason::Completed)
    }
}
