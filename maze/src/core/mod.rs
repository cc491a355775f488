//! Deterministic, pure logic for room-path discovery.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod engine;
pub mod invariants;
pub mod parser;
pub mod types;
