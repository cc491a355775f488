//! Rendering of path results for terminal output.

use anyhow::{Context, Result};

use crate::core::types::{PathResult, StepResult};
use crate::io::config::OutputFormat;

/// Render `results` in the requested format. Output ends with a newline.
pub fn render(results: &[PathResult], format: OutputFormat, detail_steps: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, detail_steps)),
        OutputFormat::Json => render_json(results),
    }
}

/// Pretty-printed JSON array with trailing newline.
pub fn render_json(results: &[PathResult]) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(results).context("serialize results json")?;
    payload.push('\n');
    Ok(payload)
}

/// Per-start breakdown of the first `detail_steps` steps, then a summary of
/// every path.
pub fn render_text(results: &[PathResult], detail_steps: usize) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "Journey starting at room {}:\n",
            result.starting_value
        ));
        for (index, step) in result.steps.iter().take(detail_steps).enumerate() {
            out.push_str(&format!("  Step {}: {}\n", index + 1, describe_step(step)));
        }
        if result.steps.len() > detail_steps {
            out.push_str(&format!(
                "  ... ({} more steps)\n",
                result.steps.len() - detail_steps
            ));
        }
        out.push_str(&format!("  Path: {}\n\n", format_path(&result.path)));
    }

    out.push_str("Discovered room paths:\n");
    for result in results {
        out.push_str(&format!("  {}\n", format_path(&result.path)));
    }
    out
}

/// `a + b = s -> n`, noting truncation when the sum has three or more digits.
pub fn describe_step(step: &StepResult) -> String {
    let line = format!(
        "{} + {} = {} -> {}",
        step.current_value, step.reversed_value, step.sum, step.next_value
    );
    if step.truncated {
        return format!("{line} (last digit of {})", step.sum);
    }
    line
}

/// `[a, b, c]`.
pub fn format_path(path: &[u64]) -> String {
    let joined = path
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
