use crate::suspend::{Suspension, begin_suspension};
use crate::sync::ResumeGuard;

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

/// Suspends the current task until a guarded continuation is resumed.
///
/// A fresh [`ResumeGuard`] is created and passed to `setup`, which runs
/// synchronously before this function returns. `setup` should arrange for
/// one of the guard's `resume_*` methods to be called, usually from the
/// completion callback of a callback-style API. The returned future then
/// resolves with the first delivered outcome:
///
/// - extra resume calls are absorbed by the guard and return `false`;
/// - if no resume call ever happens, the future never completes.
///
/// # Examples
///
/// ```
/// use singleshot::runtime::block_on;
/// use singleshot::with_guarded_continuation;
///
/// let result = block_on(with_guarded_continuation::<u32, String, _>(|guard| {
///     let other = guard.clone();
///     std::thread::spawn(move || {
///         guard.resume_returning(1);
///     });
///     std::thread::spawn(move || {
///         other.resume_throwing("late".to_string());
///     });
/// }));
///
/// assert!(matches!(result, Ok(1) | Err(_)));
/// ```
pub fn with_guarded_continuation<T, E, F>(setup: F) -> Suspension<T, E>
where
    F: FnOnce(Arc<ResumeGuard<T, E>>),
{
    begin_suspension(|continuation| setup(Arc::new(ResumeGuard::new(continuation))))
}

/// Non-failing form of [`with_guarded_continuation`].
///
/// The guard's error type is [`Infallible`], so only
/// [`resume_returning`](ResumeGuard::resume_returning) (or `resume_with(Ok(..))`)
/// can be called, and the future resolves directly to `T`.
///
/// ```rust,ignore
/// let answer = with_guarded_infallible_continuation(|guard| {
///     legacy_api.fetch(move |value| {
///         guard.resume_returning(value);
///     });
/// })
/// .await;
/// ```
pub fn with_guarded_infallible_continuation<T, F>(setup: F) -> InfallibleSuspension<T>
where
    F: FnOnce(Arc<ResumeGuard<T, Infallible>>),
{
    InfallibleSuspension {
        inner: with_guarded_continuation(setup),
    }
}

/// Future returned by [`with_guarded_infallible_continuation`].
///
/// Resolves to the delivered value; it can never fail.
pub struct InfallibleSuspension<T> {
    inner: Suspension<T, Infallible>,
}

impl<T> Future for InfallibleSuspension<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        match ready!(Pin::new(&mut self.inner).poll(cx)) {
            Ok(value) => Poll::Ready(value),
            Err(never) => match never {},
        }
    }
}

impl<T> fmt::Debug for InfallibleSuspension<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InfallibleSuspension")
            .field(&self.inner)
            .finish()
    }
}
