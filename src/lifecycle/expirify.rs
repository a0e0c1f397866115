//! A wrapper that forwards calls only until a deadline passes.

use super::State;
use crate::time::{Clock, SystemClock};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// Error of constructing a time-limited wrapper with a zero timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTimeout;

impl fmt::Display for InvalidTimeout {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        write!(fmtr, "timeout must be a positive duration")
    }
}

impl std::error::Error for InvalidTimeout {}

/// Wraps a function so that it only forwards calls made before `timeout`
/// has elapsed, measured against the wall clock from the moment of
/// construction. Calls at or past the deadline retire the wrapper, drop the
/// held function and return `None`.
///
/// Fails with [`InvalidTimeout`] if `timeout` is zero, before any wrapper
/// is built.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wrappy::expirify;
///
/// let mut double = expirify(|n: u32| n * 2, Duration::from_secs(60))?;
/// assert_eq!(double.call(4), Some(8));
/// # Ok::<(), wrappy::InvalidTimeout>(())
/// ```
pub fn expirify<F>(
    f: F,
    timeout: Duration,
) -> Result<Expirified<F>, InvalidTimeout> {
    expirify_with(f, timeout, SystemClock)
}

/// Same as [`expirify`], measuring the deadline against an explicit
/// [`Clock`]. A [`ManualClock`](crate::time::ManualClock) makes expiry
/// deterministic:
///
/// ```
/// use std::time::Duration;
/// use wrappy::{expirify_with, time::ManualClock};
///
/// let clock = ManualClock::new();
/// let mut double =
///     expirify_with(|n: u32| n * 2, Duration::from_millis(50), clock.clone())?;
/// assert_eq!(double.call(4), Some(8));
/// clock.advance(Duration::from_millis(50));
/// assert_eq!(double.call(5), None);
/// # Ok::<(), wrappy::InvalidTimeout>(())
/// ```
pub fn expirify_with<F, C>(
    f: F,
    timeout: Duration,
    clock: C,
) -> Result<Expirified<F, C>, InvalidTimeout>
where
    C: Clock,
{
    if timeout.is_zero() {
        return Err(InvalidTimeout);
    }
    let deadline = clock.now() + timeout;
    Ok(Expirified { state: State::Active(f), deadline, clock })
}

/// Wrapper returned by [`expirify`] and [`expirify_with`].
#[derive(Debug)]
pub struct Expirified<F, C = SystemClock> {
    state: State<F>,
    deadline: Instant,
    clock: C,
}

impl<F, C> Expirified<F, C>
where
    C: Clock,
{
    /// Forwards `args` to the held function and returns its result, unless
    /// the deadline has passed or the wrapper is already retired, in which
    /// case nothing happens and `None` is returned.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.clock.now() >= self.deadline {
            self.state.retire();
        }
        let function = self.state.as_active()?;
        Some(function(args))
    }

    /// Tests whether the wrapper would still forward a call made right now.
    pub fn is_active(&self) -> bool {
        self.state.is_active() && self.clock.now() < self.deadline
    }
}
