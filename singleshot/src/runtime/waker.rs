use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Wake, Waker};
use std::thread::{self, Thread};

/// Wake-up signal for a thread blocked in [`block_on`](super::block_on).
///
/// Waking sets the `notified` flag and unparks the owning thread. The flag
/// absorbs wake-ups that arrive while the thread is still polling, so a
/// wake between a `Poll::Pending` and the next park is never lost.
pub(crate) struct ThreadNotify {
    /// The thread that runs `block_on`.
    thread: Thread,

    /// Set by any wake, cleared by the blocked thread before re-polling.
    notified: AtomicBool,
}

impl ThreadNotify {
    /// Creates a notifier bound to the current thread.
    pub(crate) fn current() -> Arc<Self> {
        Arc::new(Self {
            thread: thread::current(),
            notified: AtomicBool::new(false),
        })
    }

    /// Parks the current thread until a wake-up has been recorded.
    ///
    /// Spurious unparks are filtered out by re-checking the flag.
    pub(crate) fn wait(&self) {
        while !self.notified.swap(false, Ordering::Acquire) {
            thread::park();
        }
    }
}

impl Wake for ThreadNotify {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.notified.store(true, Ordering::Release);
        self.thread.unpark();
    }
}

/// Creates a [`Waker`] that unparks the thread owning `notify`.
pub(crate) fn make_waker(notify: Arc<ThreadNotify>) -> Waker {
    Waker::from(notify)
}
