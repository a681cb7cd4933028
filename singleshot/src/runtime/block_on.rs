use super::waker::{ThreadNotify, make_waker};

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll};

/// Runs a future to completion on the current thread.
///
/// The future is polled on the calling thread. Whenever it returns
/// `Poll::Pending`, the thread parks until the future's waker is invoked,
/// from any thread, and then polls again.
///
/// This is the driver used by `#[singleshot::test]`, `#[singleshot::main]`
/// and the crate's own tests. It runs exactly one future and has no task
/// queue, timers or I/O; callback APIs are expected to complete from their
/// own threads.
///
/// # Examples
///
/// ```
/// use singleshot::runtime::block_on;
///
/// let result = block_on(async { 40 + 2 });
/// assert_eq!(result, 42);
/// ```
pub fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    let mut future = pin!(future);

    let notify = ThreadNotify::current();
    let waker = make_waker(notify.clone());
    let mut cx = Context::from_waker(&waker);

    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }

        notify.wait();
    }
}
