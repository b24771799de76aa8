use std::time::{Duration, Instant};

/// Source of time for the driver
///
/// Used for the read timeout and for the pauses between polls in
/// [`run_state`][super::Driver::run_state]. `now` has to be monotonic, its
/// origin doesn't matter.
pub trait Clock {
    /// Returns the time passed since some fixed but arbitrary point
    fn now(&self) -> Duration;
    /// Blocks for `duration`
    fn sleep(&self, duration: Duration);
}

/// [`Clock`] backed by [`Instant`] and [`std::thread::sleep`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Returns a clock whose origin is the time of the call
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration)
    }
}
