//! Conversion from synchronous functions to callback-last ones.

use crate::callback::Failure;
use std::panic;

/// Wraps a synchronous function so that it reports through a trailing
/// callback instead of returning directly.
///
/// The callback is entered exactly once per call, whichever way the wrapped
/// function exits: a returned `Ok` arrives as a success, a returned `Err` as
/// [`Failure::Rejected`], and a panic is contained and delivered as
/// [`Failure::Panicked`].
///
/// # Examples
///
/// ```
/// use wrappy::asyncify;
///
/// let mut add = asyncify(|(a, b): (i32, i32)| Ok::<_, String>(a + b));
/// add.call((5, 7), |outcome| assert_eq!(outcome.unwrap(), 12));
/// ```
pub fn asyncify<F>(f: F) -> Asyncified<F> {
    Asyncified { function: f }
}

/// Adapter returned by [`asyncify`].
#[derive(Debug, Clone, Copy)]
pub struct Asyncified<F> {
    function: F,
}

impl<F> Asyncified<F> {
    /// Invokes the wrapped function with `args`, synchronously, and hands
    /// the outcome to `callback` before returning.
    pub fn call<A, T, E, C>(&mut self, args: A, callback: C)
    where
        F: FnMut(A) -> Result<T, E>,
        C: FnOnce(Result<T, Failure<E>>),
    {
        let function = &mut self.function;
        let result =
            panic::catch_unwind(panic::AssertUnwindSafe(move || function(args)));

        match result {
            Ok(Ok(data)) => callback(Ok(data)),
            Ok(Err(error)) => callback(Err(Failure::Rejected(error))),
            Err(payload) => callback(Err(Failure::Panicked(payload))),
        }
    }
}
