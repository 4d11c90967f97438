//! Daily step tracker.
//!
//! Loads a month of daily step counts from a text file into a growable
//! sequence, reports on it, and walks it through a fixed series of
//! dynamic-array operations. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (sequence, statistics, mutation
//!   script, shift, top-K, row layout). No I/O.
//! - **[`io`]**: Configuration and steps-file loading.
//!
//! [`pipeline`] runs the steps in order and [`report`] renders them as text.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
