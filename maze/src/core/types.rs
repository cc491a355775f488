//! Shared deterministic types for the sequence engine.
//!
//! These types define stable contracts between the core and the adapters that
//! render them. They carry no references to presentation state and serialize
//! with stable snake_case field names.

use serde::{Deserialize, Serialize};

/// Breakdown of a single reversal-and-sum step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Value being processed in this step.
    pub current_value: u64,
    /// `current_value` with its decimal digits reversed.
    pub reversed_value: u64,
    /// `current_value + reversed_value`, widened so it never overflows.
    pub sum: u128,
    /// Value carried into the next step.
    pub next_value: u64,
    /// True iff `sum >= 100`; `next_value` is then the last digit of `sum`.
    pub truncated: bool,
}

/// Full derivation for one starting value.
///
/// `path[i]` always equals `steps[i].current_value`, and both vectors have
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub starting_value: u64,
    pub path: Vec<u64>,
    pub steps: Vec<StepResult>,
}
