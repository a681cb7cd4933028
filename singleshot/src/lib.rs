//! # singleshot
//!
//! **singleshot** bridges callback-style asynchronous APIs into `async` code
//! with an exactly-once guarantee, as part of the **Nebula** ecosystem.
//!
//! Callback APIs do not always behave: a buggy library, a retry path or a
//! race between a success and an error handler can invoke the same
//! completion callback more than once. Resuming a one-shot continuation
//! twice is normally fatal. singleshot absorbs those extra calls instead:
//!
//! - [`ResumeGuard`] wraps a one-shot continuation and lets any number of
//!   threads race to resume it. Exactly one wins and gets `true`; every
//!   other attempt is a no-op that returns `false`.
//! - [`with_guarded_continuation`] and [`with_guarded_infallible_continuation`]
//!   create the suspension point, hand a shared guard to your setup
//!   closure and resolve with the first delivered outcome.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use singleshot::with_guarded_continuation;
//!
//! #[singleshot::main]
//! async fn main() {
//!     let body = with_guarded_continuation(|guard| {
//!         legacy_http::get("https://example.com", move |result| {
//!             // Safe even if the library calls this twice.
//!             guard.resume_with(result);
//!         });
//!     })
//!     .await;
//!
//!     println!("{body:?}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`suspend`] — The raw one-shot continuation and the future awaiting it
//! - [`sync`] — The exactly-once [`ResumeGuard`]
//! - [`runtime`] — A minimal `block_on` driver
//!
//! ## Features
//!
//! - `macros` (default) — `#[singleshot::main]` and `#[singleshot::test]`

mod bridge;

pub mod runtime;
pub mod suspend;
pub mod sync;

pub use bridge::{
    InfallibleSuspension, with_guarded_continuation, with_guarded_infallible_continuation,
};
pub use sync::ResumeGuard;

#[cfg(feature = "macros")]
pub use singleshot_macros::{main, test};
