//! A wrapper that forwards at most one call.

use super::State;

/// Wraps a function so that it runs at most once. The first call takes the
/// function out of the wrapper and invokes it; every later call does
/// nothing and returns `None`.
///
/// The bound is [`FnOnce`], so the wrapped function may consume state it
/// captured.
///
/// # Examples
///
/// ```
/// use wrappy::once;
///
/// let mut add = once(|(a, b): (i32, i32)| a + b);
/// assert_eq!(add.call((2, 3)), Some(5));
/// assert_eq!(add.call((10, 10)), None);
/// ```
pub fn once<F>(f: F) -> Once<F> {
    Once { state: State::Active(f) }
}

/// Wrapper returned by [`once`].
#[derive(Debug)]
pub struct Once<F> {
    state: State<F>,
}

impl<F> Once<F> {
    /// Forwards `args` to the held function if it has not run yet,
    /// returning its result; returns `None` on every later call.
    ///
    /// Taking the function out and invoking it happens under the exclusive
    /// borrow, so the at-most-once guarantee holds without any locking.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnOnce(A) -> R,
    {
        let function = self.state.take()?;
        Some(function(args))
    }

    /// Tests whether the single forwarded call has already happened.
    pub fn is_spent(&self) -> bool {
        !self.state.is_active()
    }
}
