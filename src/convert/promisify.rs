//! Conversion from callback-last and synchronous functions to
//! future-returning ones.

use crate::callback::{self, Callback, Failure, Listener};
use std::panic;

/// Wraps a callback-last function so that it returns a [`Listener`] future
/// instead of taking a completion handle from the caller.
///
/// Each call builds a fresh handle/listener pair, hands the [`Callback`] to
/// the wrapped function along with the arguments, and returns the listener.
/// The listener settles exactly once, driven by whatever the function does
/// first: settling the handle resolves or rejects it, dropping the handle
/// unsettled rejects it with [`Failure::Dropped`], and a panic before any
/// settlement rejects it with [`Failure::Panicked`]. A settlement that
/// happened before the panic wins.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use wrappy::{promisify, callback::Callback};
///
/// let mut add = promisify(|(a, b): (i32, i32), cb: Callback<i32, String>| {
///     cb.succeed(a + b);
/// });
/// let sum = block_on(add.call((5, 7)));
/// assert_eq!(sum.unwrap(), 12);
/// ```
pub fn promisify<F>(f: F) -> Promisified<F> {
    Promisified { function: f }
}

/// Adapter returned by [`promisify`].
#[derive(Debug, Clone, Copy)]
pub struct Promisified<F> {
    function: F,
}

impl<F> Promisified<F> {
    /// Invokes the wrapped function with `args` plus an internally created
    /// completion handle, returning the listener for the outcome.
    pub fn call<A, T, E>(&mut self, args: A) -> Listener<T, E>
    where
        F: FnMut(A, Callback<T, E>),
    {
        let (handle, listener) = callback::channel();
        let function = &mut self.function;
        let result = panic::catch_unwind(panic::AssertUnwindSafe(move || {
            function(args, handle)
        }));

        match result {
            Ok(()) => listener,
            Err(payload) => listener.or_panicked(payload),
        }
    }
}

/// Wraps a synchronous function so that it reports through a [`Listener`]
/// future instead of a direct return value.
///
/// This supports the secondary error convention of signaling failure by
/// returning an error value rather than panicking: a returned `Err` rejects
/// the listener with [`Failure::Rejected`], while a contained panic rejects
/// it with [`Failure::Panicked`]. Either way the caller observes failures
/// through the deferred channel only.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use wrappy::promisify_sync;
///
/// let mut half = promisify_sync(|n: u32| {
///     if n % 2 == 0 { Ok(n / 2) } else { Err("odd") }
/// });
/// assert_eq!(block_on(half.call(8)).unwrap(), 4);
/// assert!(block_on(half.call(7)).is_err());
/// ```
pub fn promisify_sync<F>(f: F) -> PromisifiedSync<F> {
    PromisifiedSync { function: f }
}

/// Adapter returned by [`promisify_sync`].
#[derive(Debug, Clone, Copy)]
pub struct PromisifiedSync<F> {
    function: F,
}

impl<F> PromisifiedSync<F> {
    /// Invokes the wrapped function with `args`, synchronously, and returns
    /// an already-settled listener for its outcome.
    pub fn call<A, T, E>(&mut self, args: A) -> Listener<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        let function = &mut self.function;
        let result =
            panic::catch_unwind(panic::AssertUnwindSafe(move || function(args)));

        match result {
            Ok(Ok(data)) => Listener::settled(Ok(data)),
            Ok(Err(error)) => Listener::settled(Err(Failure::Rejected(error))),
            Err(payload) => Listener::settled(Err(Failure::Panicked(payload))),
        }
    }
}
