//! Step-by-step implementations of bubble, selection, insertion and quick sort.
//!
//! Each sorter mutates an [`ArrayModel`] in place and hands control to a [`StepObserver`] after
//! every swap or placement, so a presentation layer can redraw the array (and pause, to pace
//! the animation) before the next step happens. The observer is also asked whether the run was
//! cancelled; a cancelled run stops right there and leaves the array as it is.
//!
//! # Example
//!
//! ```
//! use sortviz_orst::orst::{self, Algorithm, Callbacks, TerminationReason};
//! use sortviz_orst::ArrayModel;
//!
//! let mut array = ArrayModel::from_vec(vec![5, 3, 8, 1]).unwrap();
//! let mut swaps = 0;
//! let mut observer = Callbacks::new(|_values: &[i32], _boundary: usize| swaps += 1, || false);
//!
//! let reason = orst::run(&mut array, Algorithm::Bubble, &mut observer).unwrap();
//! assert_eq!(reason, TerminationReason::Completed);
//! assert_eq!(array.as_slice(), &[1, 3, 5, 8]);
//! assert_eq!(swaps, 4);
//! ```

mod sorters;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;

use std::fmt::{self, Display};
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{ArrayModel, Result};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// A sorter reports every value-changing step to `observer` and returns
/// [`TerminationReason::Cancelled`] as soon as the observer reports a cancellation.
pub trait Sorter<T>
where
    T: Ord + Clone,
{
    fn sort<O>(&self, array: &mut ArrayModel<T>, observer: &mut O) -> Result<TerminationReason>
    where
        O: StepObserver<T>;
}

/// Receives the array after every step of a sort and decides whether the sort may go on.
///
/// [`on_step`](StepObserver::on_step) may block (to pace an animation, say); the sorter does
/// not continue until it returns.
pub trait StepObserver<T> {
    /// Called after every swap, shift or placement. `boundary` hints how much of the array is
    /// settled and is only meant for presentation.
    fn on_step(&mut self, values: &[T], boundary: usize);

    /// Polled after every step, before comparisons and at the start of every pass.
    fn is_cancelled(&self) -> bool;
}

impl<T, O> StepObserver<T> for &mut O
where
    O: StepObserver<T> + ?Sized,
{
    fn on_step(&mut self, values: &[T], boundary: usize) {
        (**self).on_step(values, boundary)
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Turns a pair of closures into a [`StepObserver`].
pub struct Callbacks<S, C> {
    on_step: S,
    is_cancelled: C,
}

impl<S, C> Callbacks<S, C> {
    pub fn new(on_step: S, is_cancelled: C) -> Self {
        Self {
            on_step,
            is_cancelled,
        }
    }
}

impl<T, S, C> StepObserver<T> for Callbacks<S, C>
where
    S: FnMut(&[T], usize),
    C: Fn() -> bool,
{
    fn on_step(&mut self, values: &[T], boundary: usize) {
        (self.on_step)(values, boundary)
    }

    fn is_cancelled(&self) -> bool {
        (self.is_cancelled)()
    }
}

/// A cloneable stop flag. Any clone may request cancellation, from any thread, and the running
/// sort notices it at its next step boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clears a pending request so the handle can be reused for the next run.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Why a sort stopped producing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The algorithm ran to its natural end and the array is in ascending order.
    Completed,
    /// A cancellation was observed. The array is left partially sorted.
    Cancelled,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "completed"),
            TerminationReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The algorithms the engine can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Algorithm {
    /// Adjacent-pair sweeps, each pass one shorter than the last
    #[default]
    Bubble,
    /// Pick the minimum of the unsorted rest and swap it into place
    Selection,
    /// Shift larger values right and drop each element into its slot
    Insertion,
    /// Iterative Lomuto partitioning with the last element as pivot
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => "O(n^2)",
            Algorithm::Quick => "O(n log n) avg, O(n^2) worst",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `array` with `algorithm`, reporting each step to `observer`.
///
/// Returns [`TerminationReason::Completed`] with the array in ascending order, or
/// [`TerminationReason::Cancelled`] as soon as the observer asks to stop.
pub fn run<T, O>(
    array: &mut ArrayModel<T>,
    algorithm: Algorithm,
    observer: &mut O,
) -> Result<TerminationReason>
where
    T: Ord + Clone,
    O: StepObserver<T>,
{
    debug!(%algorithm, len = array.len(), "sort started");

    let reason = match algorithm {
        Algorithm::Bubble => BubbleSorter.sort(array, observer),
        Algorithm::Selection => SelectionSorter.sort(array, observer),
        Algorithm::Insertion => InsertionSorter.sort(array, observer),
        Algorithm::Quick => QuickSorter.sort(array, observer),
    }?;

    debug_assert!(reason == TerminationReason::Cancelled || array.is_sorted());
    debug!(%algorithm, %reason, "sort finished");
    Ok(reason)
}

// Hands the array to the observer and polls for cancellation right after it.
fn step<T, O>(array: &ArrayModel<T>, boundary: usize, observer: &mut O) -> ControlFlow<()>
where
    O: StepObserver<T>,
{
    trace!(boundary, "step");
    observer.on_step(array.as_slice(), boundary);
    cancelled(observer)
}

fn cancelled<T, O>(observer: &O) -> ControlFlow<()>
where
    O: StepObserver<T>,
{
    if observer.is_cancelled() {
        debug!("cancellation observed");
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_handle_is_shared_between_clones() {
        let handle = CancelHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_cancelled());

        clone.cancel();
        assert!(handle.is_cancelled());

        handle.reset();
        assert!(!clone.is_cancelled());
    }

    #[test]
    fn algorithm_labels() {
        assert_eq!(Algorithm::default(), Algorithm::Bubble);
        assert_eq!(Algorithm::Selection.to_string(), "Selection Sort");
        assert_eq!(Algorithm::Insertion.time_complexity(), "O(n^2)");
        assert_eq!(
            Algorithm::Quick.time_complexity(),
            "O(n log n) avg, O(n^2) worst"
        );
    }

    #[test]
    fn every_algorithm_sorts_through_run() {
        for algorithm in Algorithm::ALL {
            let mut array = ArrayModel::from_vec(vec![9, 4, 4, 7, 1, 0, 3]).unwrap();
            let mut observer = Callbacks::new(|_: &[i32], _: usize| {}, || false);
            let reason = run(&mut array, algorithm, &mut observer).unwrap();
            assert_eq!(reason, TerminationReason::Completed, "{algorithm}");
            assert_eq!(array.as_slice(), &[0, 1, 3, 4, 4, 7, 9], "{algorithm}");
        }
    }

    #[test]
    fn cancelled_before_the_first_step() {
        for algorithm in Algorithm::ALL {
            let mut array = ArrayModel::from_vec(vec![3, 2, 1]).unwrap();
            let mut observer =
                Callbacks::new(|_: &[i32], _: usize| panic!("no step expected"), || true);
            let reason = run(&mut array, algorithm, &mut observer).unwrap();
            assert_eq!(reason, TerminationReason::Cancelled, "{algorithm}");
            assert_eq!(array.as_slice(), &[3, 2, 1], "{algorithm}");
        }
    }
}
