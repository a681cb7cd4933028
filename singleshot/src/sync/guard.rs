use crate::suspend::Continuation;

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Guards a [`Continuation`] so that it is resumed at most once.
///
/// `ResumeGuard` is meant to be shared (usually behind an `Arc`) between
/// every place that might complete an operation: the completion callback
/// of a callback-style API, a retry path, an error path, and so on. Any
/// number of threads may call the `resume_*` methods concurrently. Exactly
/// one call performs the delivery and returns `true`; every other call is
/// a silent no-op that returns `false` and drops its value.
///
/// Which caller wins is decided by lock-acquisition order and is
/// unspecified.
///
/// # Examples
///
/// ```
/// use singleshot::runtime::block_on;
/// use singleshot::suspend::begin_suspension;
/// use singleshot::ResumeGuard;
///
/// let outcome = block_on(begin_suspension::<_, (), _>(|continuation| {
///     let guard = ResumeGuard::new(continuation);
///
///     assert!(guard.resume_returning("first"));
///     assert!(!guard.resume_returning("second"));
///     assert!(guard.has_resumed());
/// }));
///
/// assert_eq!(outcome, Ok("first"));
/// ```
pub struct ResumeGuard<T, E> {
    /// The continuation, until some caller takes it.
    ///
    /// `None` means "already resumed": the resumed flag and the ownership of
    /// the handle are one value, so they can never be observed out of sync.
    continuation: Mutex<Option<Continuation<T, E>>>,
}

impl<T, E> ResumeGuard<T, E> {
    /// Wraps a continuation that has not been resumed yet.
    pub fn new(continuation: Continuation<T, E>) -> Self {
        Self {
            continuation: Mutex::new(Some(continuation)),
        }
    }

    /// Resumes with a success value.
    ///
    /// Returns `true` if this call performed the resumption, `false` if the
    /// guard had already been resumed (the value is then discarded).
    pub fn resume_returning(&self, value: T) -> bool {
        self.resume_inner(Ok(value), "returning")
    }

    /// Resumes with a failure.
    ///
    /// Returns `true` if this call performed the resumption, `false` if the
    /// guard had already been resumed (the error is then discarded).
    pub fn resume_throwing(&self, error: E) -> bool {
        self.resume_inner(Err(error), "throwing")
    }

    /// Resumes with either outcome.
    ///
    /// Same guarantees as [`resume_returning`](Self::resume_returning) and
    /// [`resume_throwing`](Self::resume_throwing). The returned flag is
    /// informational.
    pub fn resume_with(&self, outcome: Result<T, E>) -> bool {
        self.resume_inner(outcome, "result")
    }

    /// Returns `true` once some caller has resumed the guard.
    ///
    /// Takes the same lock as the `resume_*` methods, so a `true` here is
    /// ordered after the winning call's take of the continuation.
    pub fn has_resumed(&self) -> bool {
        self.lock().is_none()
    }

    fn resume_inner(&self, outcome: Result<T, E>, form: &'static str) -> bool {
        // The continuation leaves the slot under the lock. Delivery itself
        // happens after the lock is released: once the slot is empty no
        // other caller can reach the continuation.
        let taken = self.lock().take();

        let Some(continuation) = taken else {
            tracing::debug!(form, "ignored redundant resume");
            return false;
        };

        continuation.resume(outcome);
        tracing::trace!(form, "resumed continuation");

        true
    }

    /// Locks the slot.
    ///
    /// The critical sections only call `Option::take` or `Option::is_none`,
    /// which cannot panic, so a poisoned lock still guards a valid slot.
    fn lock(&self) -> MutexGuard<'_, Option<Continuation<T, E>>> {
        self.continuation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, E> fmt::Debug for ResumeGuard<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeGuard")
            .field("resumed", &self.has_resumed())
            .finish()
    }
}
