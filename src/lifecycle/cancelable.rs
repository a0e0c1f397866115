//! A wrapper whose forwarding can be revoked explicitly.

use super::State;

/// Wraps a function so that forwarding can be revoked through
/// [`Cancelable::cancel`]. Until then every call forwards to the held
/// function; afterwards calls do nothing and return `None`.
///
/// # Examples
///
/// ```
/// use wrappy::cancelable;
///
/// let mut shout = cancelable(|name: &str| format!("{}!", name));
/// assert_eq!(shout.call("hey").as_deref(), Some("hey!"));
/// shout.cancel();
/// assert_eq!(shout.call("hey"), None);
/// ```
pub fn cancelable<F>(f: F) -> Cancelable<F> {
    Cancelable { state: State::Active(f) }
}

/// Wrapper returned by [`cancelable`].
#[derive(Debug)]
pub struct Cancelable<F> {
    state: State<F>,
}

impl<F> Cancelable<F> {
    /// Forwards `args` to the held function and returns its result, or
    /// returns `None` after cancellation.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let function = self.state.as_active()?;
        Some(function(args))
    }

    /// Retires the wrapper, dropping the held function. Idempotent: later
    /// cancels have no further effect. A call already in progress cannot be
    /// interrupted; cancellation only gates future calls.
    pub fn cancel(&mut self) {
        self.state.retire();
    }

    /// Tests whether the wrapper has been canceled.
    pub fn is_canceled(&self) -> bool {
        !self.state.is_active()
    }
}
