use crate::callback::Payload;
use pin_project::pin_project;
use std::{future::Future, panic, pin::Pin, task};

/// Future adapter that contains a panic of the inner future and yields it as
/// an `Err` payload instead of unwinding through the executor.
#[pin_project]
pub struct CatchUnwind<A>
where
    A: Future,
{
    #[pin]
    inner: A,
}

impl<A> CatchUnwind<A>
where
    A: Future,
{
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A> Future for CatchUnwind<A>
where
    A: Future,
{
    type Output = Result<A::Output, Payload>;

    fn poll(
        self: Pin<&mut Self>,
        ctx: &mut task::Context<'_>,
    ) -> task::Poll<Self::Output> {
        let inner = self.project().inner;
        let result =
            panic::catch_unwind(panic::AssertUnwindSafe(move || inner.poll(ctx)));

        match result {
            Ok(task::Poll::Pending) => task::Poll::Pending,
            Ok(task::Poll::Ready(data)) => task::Poll::Ready(Ok(data)),
            Err(payload) => task::Poll::Ready(Err(payload)),
        }
    }
}
