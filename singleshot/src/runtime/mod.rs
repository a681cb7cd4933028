//! Minimal future driver.
//!
//! singleshot does not ship a scheduler; resumption works with any executor.
//! This module only provides [`block_on`], the small current-thread driver
//! behind the attribute macros, the examples and the tests.

mod block_on;
mod waker;

pub use block_on::block_on;
