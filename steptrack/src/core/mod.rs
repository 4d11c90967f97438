//! Deterministic, pure logic over the step sequence.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return values the reporting layer renders.

pub mod layout;
pub mod script;
pub mod sequence;
pub mod shift;
pub mod stats;
pub mod topk;
