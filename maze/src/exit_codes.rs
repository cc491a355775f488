//! Stable exit codes for maze CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, I/O or other errors.
pub const ERROR: i32 = 1;
/// The starting values could not be parsed.
pub const INVALID_INPUT: i32 = 2;
