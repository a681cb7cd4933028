use super::continuation::Continuation;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Future that resolves once the paired [`Continuation`] is resumed.
///
/// Created by [`begin_suspension`]. There is no timeout and no
/// cancellation: if the continuation is dropped without being resumed, the
/// future stays pending forever instead of reporting an error. Dropping the
/// `Suspension` is allowed at any time; a later resume simply discards its
/// outcome.
pub struct Suspension<T, E> {
    /// `None` once the outcome was taken or the continuation was abandoned.
    receiver: Option<oneshot::Receiver<Result<T, E>>>,

    /// Set when the continuation was dropped unresumed.
    abandoned: bool,
}

impl<T, E> Suspension<T, E> {
    fn new(receiver: oneshot::Receiver<Result<T, E>>) -> Self {
        Self {
            receiver: Some(receiver),
            abandoned: false,
        }
    }

    fn state(&self) -> &'static str {
        match (&self.receiver, self.abandoned) {
            (Some(_), _) => "waiting",
            (None, true) => "abandoned",
            (None, false) => "completed",
        }
    }
}

impl<T, E> Future for Suspension<T, E> {
    type Output = Result<T, E>;

    /// Polls the suspension.
    ///
    /// A closed channel means the continuation was dropped without a
    /// resume. That is treated like `std::future::pending()`: the future
    /// returns `Poll::Pending` from then on and is never woken.
    ///
    /// # Panics
    ///
    /// Panics if polled again after it returned `Poll::Ready`.
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.abandoned {
            return Poll::Pending;
        }

        let Some(receiver) = self.receiver.as_mut() else {
            panic!("`Suspension` polled after completion");
        };

        match Pin::new(receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => {
                self.receiver = None;
                Poll::Ready(outcome)
            }
            Poll::Ready(Err(_closed)) => {
                self.receiver = None;
                self.abandoned = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, E> fmt::Debug for Suspension<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suspension")
            .field("state", &self.state())
            .finish()
    }
}

/// Creates a suspension point and hands its continuation to `setup`.
///
/// `setup` runs synchronously, before this function returns. It is expected
/// to arrange for the continuation to be resumed exactly once, typically by
/// moving it into the completion callback of some other API. The returned
/// future resolves with the delivered outcome.
///
/// # Examples
///
/// ```
/// use singleshot::runtime::block_on;
/// use singleshot::suspend::begin_suspension;
///
/// let value = block_on(begin_suspension::<_, (), _>(|continuation| {
///     std::thread::spawn(move || continuation.resume_returning(7));
/// }));
///
/// assert_eq!(value, Ok(7));
/// ```
pub fn begin_suspension<T, E, F>(setup: F) -> Suspension<T, E>
where
    F: FnOnce(Continuation<T, E>),
{
    let (sender, receiver) = oneshot::channel();

    setup(Continuation::new(sender));

    Suspension::new(receiver)
}
