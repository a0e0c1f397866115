//! This module implements the clock abstraction used by the time-limited
//! wrapper.

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

/// A source of the current instant. The time-limited wrapper measures its
/// deadline against a clock instead of owning a timer, which keeps expiry
/// deterministic under a [`ManualClock`].
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time, so a
/// handle kept by the caller advances the clock inside a wrapper.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wrappy::time::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let then = clock.now();
/// clock.advance(Duration::from_millis(50));
/// assert_eq!(clock.now() - then, Duration::from_millis(50));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock frozen at its origin.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
