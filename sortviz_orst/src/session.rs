//! One round of visualization: a freshly generated array, the state of the sort running over it,
//! and the handle used to stop that sort.
//!
//! ```text
//!            run()                    sort finishes               acknowledge()
//!   Idle ───────────▶ Running ───────────────────────▶ Completed ───────────────▶ Idle
//!                        │
//!                        │ request_stop()
//!                        ▼                next step boundary
//!                 CancelRequested ───────────────────────────────────────────────▶ Idle
//! ```
//!
//! [`reset`](Session::reset) and [`resize`](Session::resize) regenerate the array and always
//! land in [`SortState::Idle`]. A stop requested while no sort is running is kept until a run
//! honours it: the next run stops before its first step.

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::orst::{self, Algorithm, CancelHandle, StepObserver, TerminationReason};
use crate::{ArrayModel, Result};

/// Where a [`Session`] is in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SortState {
    #[default]
    Idle,
    Running,
    CancelRequested,
    Completed,
}

impl SortState {
    fn from_repr(repr: u8) -> Self {
        match repr {
            0 => SortState::Idle,
            1 => SortState::Running,
            2 => SortState::CancelRequested,
            _ => SortState::Completed,
        }
    }
}

impl Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            SortState::Idle => "idle",
            SortState::Running => "running",
            SortState::CancelRequested => "cancel requested",
            SortState::Completed => "completed",
        };
        f.write_str(state)
    }
}

/// Stops the sort of a [`Session`] from any thread and reads the session's state while the
/// sort is running.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    cancel: CancelHandle,
    state: Arc<AtomicU8>,
}

impl StopHandle {
    /// Asks the running sort to stop at its next step boundary. Outside a run the request stays
    /// pending and stops the next run before its first step.
    pub fn request_stop(&self) {
        self.cancel.cancel();
        self.mark_cancel_requested();
    }

    /// Whether a stop was requested and not yet honoured by a run.
    pub fn is_stop_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn state(&self) -> SortState {
        SortState::from_repr(self.state.load(Ordering::SeqCst))
    }

    fn mark_cancel_requested(&self) {
        let (from, to) = (SortState::Running, SortState::CancelRequested);
        if self
            .state
            .compare_exchange(from as u8, to as u8, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            debug!(%from, %to, "session state changed");
        }
    }

    fn swap_state(&self, to: SortState) -> SortState {
        SortState::from_repr(self.state.swap(to as u8, Ordering::SeqCst))
    }
}

/// Owns the array of one round and drives the engine over it.
#[derive(Debug)]
pub struct Session {
    array: ArrayModel<u32>,
    stop: StopHandle,
}

impl Session {
    /// Starts a round over `size` random values. Fails when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::with_array(ArrayModel::generate(size)?))
    }

    /// Starts a round over the given values, for seeded or hand-picked arrays.
    pub fn with_array(array: ArrayModel<u32>) -> Self {
        Self {
            array,
            stop: StopHandle::default(),
        }
    }

    pub fn array(&self) -> &ArrayModel<u32> {
        &self.array
    }

    pub fn state(&self) -> SortState {
        self.stop.state()
    }

    /// A handle that stops the current (or next) run. It stays valid across resets.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Replaces the array with fresh random values of the same size.
    pub fn reset(&mut self) -> Result<()> {
        self.resize(self.array.len())
    }

    /// Replaces the array with `size` fresh random values. The current array is kept when
    /// `size` is invalid.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.replace(ArrayModel::generate(size)?);
        Ok(())
    }

    /// Replaces the array with the given values. A pending stop request is kept.
    pub fn replace(&mut self, array: ArrayModel<u32>) {
        self.array = array;
        self.transition(SortState::Idle);
    }

    /// Moves a completed round back to [`SortState::Idle`]. Does nothing in any other state.
    pub fn acknowledge(&mut self) {
        if self.state() == SortState::Completed {
            self.transition(SortState::Idle);
        }
    }

    /// Sorts the array with `algorithm`, calling `on_step` after every step.
    ///
    /// A completed round is acknowledged first, so calling `run` twice in a row is fine. A stop
    /// requested before this call makes it return [`TerminationReason::Cancelled`] without a
    /// single step. On return the state is [`SortState::Completed`] or, after a cancellation,
    /// [`SortState::Idle`] with the stop request cleared.
    pub fn run<F>(&mut self, algorithm: Algorithm, on_step: F) -> Result<TerminationReason>
    where
        F: FnMut(&[u32], usize),
    {
        self.acknowledge();
        self.transition(SortState::Running);
        if self.stop.is_stop_requested() {
            self.stop.mark_cancel_requested();
        }

        let mut observer = SessionObserver {
            on_step,
            cancel: &self.stop.cancel,
        };
        let outcome = orst::run(&mut self.array, algorithm, &mut observer);

        match outcome {
            Ok(TerminationReason::Completed) => self.transition(SortState::Completed),
            Ok(TerminationReason::Cancelled) => {
                self.stop.cancel.reset();
                self.transition(SortState::Idle);
            }
            Err(_) => self.transition(SortState::Idle),
        }
        outcome
    }

    fn transition(&self, to: SortState) {
        let from = self.stop.swap_state(to);
        if from != to {
            debug!(%from, %to, "session state changed");
        }
    }
}

struct SessionObserver<'a, F> {
    on_step: F,
    cancel: &'a CancelHandle,
}

impl<F> StepObserver<u32> for SessionObserver<'_, F>
where
    F: FnMut(&[u32], usize),
{
    fn on_step(&mut self, values: &[u32], boundary: usize) {
        (self.on_step)(values, boundary)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
