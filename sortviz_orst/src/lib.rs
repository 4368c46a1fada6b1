//! # Introduction
//!
//! The engine behind the sorting visualizer: an [`ArrayModel`] of random values, four classic
//! in-place sorts that report each swap to a [`StepObserver`](orst::StepObserver), and a
//! [`Session`] that tracks one round from start to completion or cancellation.
//!
//! Nothing in here draws or sleeps. The observer does whatever the presentation layer needs
//! (redraw, pause to pace the animation) and the engine waits for it to return.
//!
//! # Example
//!
//! ```
//! use sortviz_orst::orst::{Algorithm, TerminationReason};
//! use sortviz_orst::Session;
//!
//! let mut session = Session::new(20).unwrap();
//! let mut frames = Vec::new();
//! let reason = session
//!     .run(Algorithm::Insertion, |values, boundary| frames.push((values.to_vec(), boundary)))
//!     .unwrap();
//!
//! assert_eq!(reason, TerminationReason::Completed);
//! assert!(session.array().is_sorted());
//! ```

mod array;
mod error;
pub mod orst;
mod session;

pub use array::{ArrayModel, VALUE_RANGE};
pub use error::{Error, Result};
pub use session::{Session, SortState, StopHandle};
