//! One-shot suspension primitive.
//!
//! This module provides the low-level building block the rest of the crate
//! is layered on: a [`Continuation`] that resumes exactly one waiting task,
//! and the [`Suspension`] future that task awaits.
//!
//! Both halves are thin wrappers around a `tokio::sync::oneshot` channel,
//! which works with any executor. They add nothing beyond single delivery:
//! - no scheduling (any executor can poll a [`Suspension`]),
//! - no timeouts or cancellation,
//! - no protection against a shared handle being used twice.
//!
//! Most users should go through [`with_guarded_continuation`](crate::with_guarded_continuation)
//! instead of touching continuations directly.

mod continuation;
mod future;

pub use continuation::Continuation;
pub use future::{Suspension, begin_suspension};
