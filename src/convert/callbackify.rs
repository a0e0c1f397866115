//! Conversion from future-returning functions to callback-last ones.

use crate::{
    callback::{Failure, Payload},
    panic::CatchUnwind,
};
use pin_project::pin_project;
use std::{future::Future, panic, pin::Pin, task};

/// Wraps a future-returning function so that it reports through a trailing
/// callback instead of a deferred result.
///
/// Calling the adapter produces a [`Relay`] future; awaiting the relay
/// drives the wrapped function's future to completion and then enters the
/// callback exactly once with the resolution value, the rejection error, or
/// the payload of a contained panic.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use wrappy::callbackify;
///
/// let mut add = callbackify(|(a, b): (i32, i32)| async move {
///     Ok::<_, String>(a + b)
/// });
/// block_on(add.call((2, 3), |outcome| assert_eq!(outcome.unwrap(), 5)));
/// ```
pub fn callbackify<F>(f: F) -> Callbackified<F> {
    Callbackified { function: f }
}

/// Adapter returned by [`callbackify`].
#[derive(Debug, Clone, Copy)]
pub struct Callbackified<F> {
    function: F,
}

impl<F> Callbackified<F> {
    /// Invokes the wrapped function with `args` and returns a relay that,
    /// when awaited, delivers the outcome of the produced future to
    /// `callback`. A panic while producing the future poisons the relay and
    /// reaches the callback as [`Failure::Panicked`].
    pub fn call<A, T, E, Fut, C>(&mut self, args: A, callback: C) -> Relay<Fut, C>
    where
        F: FnMut(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        C: FnOnce(Result<T, Failure<E>>),
    {
        let function = &mut self.function;
        let result =
            panic::catch_unwind(panic::AssertUnwindSafe(move || function(args)));
        let step = match result {
            Ok(future) => Step::Drive(CatchUnwind::new(future)),
            Err(payload) => Step::Poisoned(Some(payload)),
        };

        Relay { step, callback: Some(callback) }
    }
}

#[pin_project(project = StepProj)]
enum Step<Fut>
where
    Fut: Future,
{
    Drive(#[pin] CatchUnwind<Fut>),
    Poisoned(Option<Payload>),
}

/// Future returned by [`Callbackified::call`]. Completes after the wrapped
/// function's future settles and the callback has been entered.
#[pin_project]
pub struct Relay<Fut, C>
where
    Fut: Future,
{
    #[pin]
    step: Step<Fut>,
    callback: Option<C>,
}

impl<Fut, T, E, C> Future for Relay<Fut, C>
where
    Fut: Future<Output = Result<T, E>>,
    C: FnOnce(Result<T, Failure<E>>),
{
    type Output = ();

    fn poll(
        self: Pin<&mut Self>,
        ctx: &mut task::Context<'_>,
    ) -> task::Poll<Self::Output> {
        let this = self.project();
        let outcome = match this.step.project() {
            StepProj::Drive(future) => match future.poll(ctx) {
                task::Poll::Ready(Ok(Ok(data))) => Ok(data),
                task::Poll::Ready(Ok(Err(error))) => {
                    Err(Failure::Rejected(error))
                },
                task::Poll::Ready(Err(payload)) => {
                    Err(Failure::Panicked(payload))
                },
                task::Poll::Pending => return task::Poll::Pending,
            },
            StepProj::Poisoned(payload) => Err(Failure::Panicked(
                payload.take().expect("relay polled after completion"),
            )),
        };

        let callback =
            this.callback.take().expect("relay polled after completion");
        callback(outcome);
        task::Poll::Ready(())
    }
}
