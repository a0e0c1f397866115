//! This module defines the completion plumbing shared by the contract
//! converters: a single-use completion handle paired with a future that
//! observes the outcome of one wrapped-function invocation.

use futures::channel::oneshot;
use std::{any::Any, fmt, future::Future, pin::Pin, task};

/// The payload carried by a contained panic of a wrapped function.
pub type Payload = Box<dyn Any + Send + 'static>;

/// Why a wrapped function failed to produce a success value.
#[derive(Debug)]
pub enum Failure<E> {
    /// The function reported an error value of its own.
    Rejected(E),
    /// The function panicked! And here is the panic's payload.
    Panicked(Payload),
    /// The completion handle was dropped without ever being settled.
    Dropped,
}

impl<E> Failure<E> {
    /// Tests whether the wrapped function reported an error value.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Failure::Rejected(_))
    }

    /// Tests whether the wrapped function panicked.
    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panicked(_))
    }

    /// Tests whether the completion handle was discarded unsettled.
    pub fn is_dropped(&self) -> bool {
        matches!(self, Failure::Dropped)
    }

    /// Attempts to convert this failure into the function's own error value.
    /// Fails if the function did not reject.
    pub fn try_into_rejected(self) -> Result<E, Self> {
        match self {
            Failure::Rejected(error) => Ok(error),
            failure => Err(failure),
        }
    }
}

impl<E> fmt::Display for Failure<E>
where
    E: fmt::Display,
{
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::Rejected(error) => {
                write!(fmtr, "wrapped function failed: {}", error)
            },
            Failure::Panicked(payload) => {
                write!(fmtr, "wrapped function panicked: {:?}", payload)
            },
            Failure::Dropped => {
                write!(fmtr, "completion handle dropped without being called")
            },
        }
    }
}

impl<E> std::error::Error for Failure<E> where E: fmt::Debug + fmt::Display {}

/// Creates a connected pair of a completion handle and a listener. Settling
/// the handle settles the listener; dropping the handle unsettled rejects
/// the listener with [`Failure::Dropped`].
pub fn channel<T, E>() -> (Callback<T, E>, Listener<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (Callback { sender }, Listener { inner: Inner::Waiting(receiver) })
}

/// A single-use completion handle handed to a wrapped function in place of a
/// bare `(error, result)` callback. Every settling method consumes the
/// handle, so the paired listener settles at most once by construction.
pub struct Callback<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Callback<T, E> {
    /// Settles the paired listener with a success value.
    pub fn succeed(self, data: T) {
        let _ = self.sender.send(Ok(data));
    }

    /// Settles the paired listener with the function's own error value.
    pub fn fail(self, error: E) {
        let _ = self.sender.send(Err(error));
    }

    /// Settles the paired listener with either outcome.
    pub fn done(self, result: Result<T, E>) {
        let _ = self.sender.send(result);
    }
}

impl<T, E> fmt::Debug for Callback<T, E> {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.debug_struct("Callback").finish()
    }
}

#[derive(Debug)]
enum Inner<T, E> {
    Waiting(oneshot::Receiver<Result<T, E>>),
    Settled(Option<Result<T, Failure<E>>>),
}

/// A future observing the outcome of a single wrapped-function invocation.
/// Resolves with the function's success value or rejects with a
/// [`Failure`]; it settles exactly once, driven by whichever settlement
/// happens first.
pub struct Listener<T, E> {
    inner: Inner<T, E>,
}

impl<T, E> Listener<T, E> {
    /// Creates a listener that is already settled with `output`.
    pub(crate) fn settled(output: Result<T, Failure<E>>) -> Self {
        Self { inner: Inner::Settled(Some(output)) }
    }

    /// Resolves the race between a settlement and a panic of the wrapped
    /// function: if the completion handle was settled before the panic, the
    /// settlement wins; otherwise the listener rejects with the payload.
    pub(crate) fn or_panicked(mut self, payload: Payload) -> Self {
        if let Inner::Waiting(receiver) = &mut self.inner {
            if let Ok(Some(result)) = receiver.try_recv() {
                return Self::settled(result.map_err(Failure::Rejected));
            }
        }
        Self::settled(Err(Failure::Panicked(payload)))
    }
}

impl<T, E> fmt::Debug for Listener<T, E> {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        let state = match &self.inner {
            Inner::Waiting(_) => "Waiting",
            Inner::Settled(Some(_)) => "Settled",
            Inner::Settled(None) => "Finished",
        };
        fmtr.debug_struct("Listener").field("state", &state).finish()
    }
}

impl<T, E> Unpin for Listener<T, E> {}

impl<T, E> Future for Listener<T, E> {
    type Output = Result<T, Failure<E>>;

    fn poll(
        self: Pin<&mut Self>,
        ctx: &mut task::Context<'_>,
    ) -> task::Poll<Self::Output> {
        match &mut self.get_mut().inner {
            Inner::Waiting(receiver) => match Pin::new(receiver).poll(ctx) {
                task::Poll::Ready(Ok(Ok(data))) => task::Poll::Ready(Ok(data)),
                task::Poll::Ready(Ok(Err(error))) => {
                    task::Poll::Ready(Err(Failure::Rejected(error)))
                },
                task::Poll::Ready(Err(oneshot::Canceled)) => {
                    task::Poll::Ready(Err(Failure::Dropped))
                },
                task::Poll::Pending => task::Poll::Pending,
            },
            Inner::Settled(output) => match output.take() {
                Some(output) => task::Poll::Ready(output),
                None => panic!("listener polled after completion"),
            },
        }
    }
}
