//! Stable exit codes for the steptrack CLI.

/// Every report was produced.
pub const OK: i32 = 0;
/// The steps file could not be opened or held too few integers.
pub const INPUT_ERROR: i32 = 1;
/// Invalid arguments or configuration, or output could not be written.
pub const INVALID: i32 = 2;
