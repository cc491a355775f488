//! Orchestration for `maze discover`.
//!
//! Couples the pure core (parse, walk, invariant check) with the adapter
//! concerns (input filter, cosmetic delay). Results are fully computed before
//! any delay is applied.

use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::core::engine::find_paths;
use crate::core::invariants::validate_path;
use crate::core::parser::{ValidationError, filter_input, parse_input};
use crate::core::types::PathResult;
use crate::io::config::MazeConfig;

/// Starting values used when no input is supplied.
pub const DEFAULT_INPUT: &str = "0, 47";

/// Options for a discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverOptions {
    pub max_steps: usize,
    pub filter_input: bool,
    pub delay: Duration,
}

impl From<&MazeConfig> for DiscoverOptions {
    fn from(cfg: &MazeConfig) -> Self {
        Self {
            max_steps: cfg.max_steps,
            filter_input: cfg.filter_input,
            delay: Duration::from_millis(cfg.delay_ms),
        }
    }
}

/// Result of a successful discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverOutcome {
    /// One result per starting value, in input order.
    pub results: Vec<PathResult>,
}

/// Parse `raw`, compute every path and verify its invariants.
///
/// Validation failures surface as a [`ValidationError`] inside the returned
/// error so callers can downcast and report the offending token.
pub fn discover(raw: &str, options: &DiscoverOptions) -> Result<DiscoverOutcome> {
    let input = if options.filter_input {
        filter_input(raw)
    } else {
        raw.into()
    };
    let starts = parse_input(&input).map_err(|err: ValidationError| {
        debug!(error = %err, "input rejected");
        err
    })?;
    info!(count = starts.len(), max_steps = options.max_steps, "computing paths");

    let results = find_paths(&starts, options.max_steps);
    let violations: Vec<String> = results
        .iter()
        .flat_map(|result| validate_path(result, options.max_steps))
        .collect();
    if !violations.is_empty() {
        bail!("path invariant violations:\n- {}", violations.join("\n- "));
    }

    if !options.delay.is_zero() {
        debug!(delay = ?options.delay, "delaying output");
        thread::sleep(options.delay);
    }

    Ok(DiscoverOutcome { results })
}
