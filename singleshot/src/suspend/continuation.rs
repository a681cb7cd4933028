use std::fmt;
use tokio::sync::oneshot;

/// A one-shot handle that resumes exactly one suspended task.
///
/// A `Continuation` is handed out by [`begin_suspension`](super::begin_suspension).
/// Every `resume*` method consumes it, so the type system already prevents
/// delivering twice through the same handle. What it cannot prevent is a
/// callback API that holds the handle in shared state and tries to use it
/// more than once; that is the job of [`ResumeGuard`](crate::ResumeGuard).
///
/// Dropping a continuation without resuming it leaves the paired
/// [`Suspension`](super::Suspension) pending forever. This is always a bug
/// in the caller and is reported with a `tracing` warning.
pub struct Continuation<T, E> {
    /// `None` once the continuation has been resumed.
    sender: Option<oneshot::Sender<Result<T, E>>>,
}

impl<T, E> Continuation<T, E> {
    pub(crate) fn new(sender: oneshot::Sender<Result<T, E>>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Resumes the suspended task with `outcome`.
    ///
    /// If the awaiting [`Suspension`](super::Suspension) was already dropped,
    /// the outcome is discarded.
    pub fn resume(mut self, outcome: Result<T, E>) {
        let Some(sender) = self.sender.take() else {
            return;
        };

        if sender.send(outcome).is_err() {
            tracing::trace!("continuation resumed after its suspension was dropped");
        }
    }

    /// Resumes the suspended task with a success value.
    pub fn resume_returning(self, value: T) {
        self.resume(Ok(value));
    }

    /// Resumes the suspended task with a failure.
    pub fn resume_throwing(self, error: E) {
        self.resume(Err(error));
    }
}

impl<T, E> Drop for Continuation<T, E> {
    fn drop(&mut self) {
        if self.sender.is_some() {
            tracing::warn!(
                "continuation dropped without being resumed; the awaiting task will never complete"
            );
        }
    }
}

impl<T, E> fmt::Debug for Continuation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("resumed", &self.sender.is_none())
            .finish_non_exhaustive()
    }
}
