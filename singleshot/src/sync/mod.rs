//! Synchronization primitives for singleshot.
//!
//! The only primitive here is [`ResumeGuard`], which turns a one-shot
//! [`Continuation`](crate::suspend::Continuation) into something that can
//! safely be completed from many places at once.
//!
//! ## Design notes
//!
//! - One `std::sync::Mutex` per guard; there is no global state.
//! - The lock is held only long enough to take the continuation out, never
//!   while user code runs or while the waiting task is woken.
//! - Losing callers are not queued or retried; they return `false`
//!   immediately.
//! - Guards are safe to share between threads using `Arc`.

mod guard;

pub use guard::ResumeGuard;
