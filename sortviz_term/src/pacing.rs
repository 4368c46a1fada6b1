//! How long the animation holds each frame.
//!
//! The engine never waits on its own. The shell calls [`Pacing::pause`] from inside the step
//! callback, which holds the sort until the frame has been on screen long enough.

use std::thread;
use std::time::Duration;

use anyhow::{ensure, Result};

pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// A delay of `1 / speed` seconds per step, for a speed between [`MIN_SPEED`] and
    /// [`MAX_SPEED`].
    pub fn from_speed(speed: f64) -> Result<Self> {
        ensure!(
            (MIN_SPEED..=MAX_SPEED).contains(&speed),
            "speed must be between {MIN_SPEED} and {MAX_SPEED}, got {speed}"
        );

        Ok(Self {
            delay: Duration::from_secs_f64(1.0 / speed),
        })
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
