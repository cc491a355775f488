//! Deterministic digit-reversal sequence engine.
//!
//! Each step reverses the decimal digits of the current value, adds the
//! reversal to the value, and carries the sum forward. Sums of 100 or more
//! are truncated to their last digit.

use tracing::debug;

use crate::core::types::{PathResult, StepResult};

/// Number of steps computed per starting value unless configured otherwise.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Iteration index from which a repeated value stops the walk early.
pub const EARLY_STOP_MIN_ITERATIONS: usize = 5;

/// Sums at or above this value are truncated to their last digit.
const TRUNCATION_THRESHOLD: u128 = 100;

/// Reverse the decimal digits of `n`, dropping leading zeros of the result.
///
/// A reversal that does not fit in `u64` yields 0.
pub fn reverse_digits(n: u64) -> u64 {
    let reversed: String = n.to_string().chars().rev().collect();
    reversed.parse().unwrap_or(0)
}

/// Compute the step breakdown for `current_value`.
pub fn step(current_value: u64) -> StepResult {
    let reversed_value = reverse_digits(current_value);
    let sum = u128::from(current_value) + u128::from(reversed_value);
    let truncated = sum >= TRUNCATION_THRESHOLD;
    // Both branches are below 100, so the narrowing is lossless.
    let next_value = (if truncated { sum % 10 } else { sum }) as u64;
    StepResult {
        current_value,
        reversed_value,
        sum,
        next_value,
        truncated,
    }
}

/// Walk up to `max_steps` steps from `starting_value`.
///
/// The walk stops early once the carried value already appears in the path
/// and at least [`EARLY_STOP_MIN_ITERATIONS`] iterations have completed.
/// Shorter cycles keep running. `max_steps == 0` is treated as 1 so the
/// starting value is always recorded.
pub fn find_path(starting_value: u64, max_steps: usize) -> PathResult {
    let max_steps = max_steps.max(1);
    // Every value after the first step is below 100, so the early stop bounds
    // the walk no matter how large `max_steps` is.
    let mut path = Vec::new();
    let mut steps = Vec::new();
    let mut current = starting_value;

    for iteration in 0..max_steps {
        let result = step(current);
        path.push(current);
        steps.push(result);
        current = result.next_value;

        if iteration >= EARLY_STOP_MIN_ITERATIONS && path.contains(&current) {
            debug!(starting_value, iteration, repeated = current, "repeat detected, stopping");
            break;
        }
    }

    PathResult {
        starting_value,
        path,
        steps,
    }
}

/// Run [`find_path`] for every starting value, preserving input order.
pub fn find_paths(starts: &[u64], max_steps: usize) -> Vec<PathResult> {
    starts
        .iter()
        .map(|&start| find_path(start, max_steps))
        .collect()
}
