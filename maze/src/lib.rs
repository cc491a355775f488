//! Room-path discovery by iterated digit reversal.
//!
//! Starting from a room number, each step adds the number to its digit
//! reversal; sums of 100 or more keep only their last digit. The crate keeps
//! a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, sequence engine,
//!   invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Configuration files and output rendering.
//!
//! [`discover`] coordinates core logic with the adapters to implement the CLI.

pub mod core;
pub mod discover;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
