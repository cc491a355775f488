//! Structural invariants of a computed path.

use crate::core::types::PathResult;

/// Check invariants every [`PathResult`] must satisfy:
/// - `path` starts with `starting_value`
/// - `path` and `steps` have equal length, at most `max_steps`
/// - `steps[i].current_value == path[i]`
/// - `path[i + 1] == steps[i].next_value`
pub fn validate_path(result: &PathResult, max_steps: usize) -> Vec<String> {
    let mut errors = Vec::new();
    let start = result.starting_value;

    match result.path.first() {
        Some(&first) if first != start => {
            errors.push(format!("start {start}: path begins at {first}"));
        }
        None => errors.push(format!("start {start}: path is empty")),
        _ => {}
    }

    if result.path.len() != result.steps.len() {
        errors.push(format!(
            "start {start}: path has {} entries but steps has {}",
            result.path.len(),
            result.steps.len()
        ));
    }

    if result.path.len() > max_steps.max(1) {
        errors.push(format!(
            "start {start}: path length {} exceeds max_steps {max_steps}",
            result.path.len()
        ));
    }

    for (index, (value, step)) in result.path.iter().zip(&result.steps).enumerate() {
        if step.current_value != *value {
            errors.push(format!(
                "start {start}: step {index} processes {} but path has {value}",
                step.current_value
            ));
        }
    }

    for (index, (pair, step)) in result.path.windows(2).zip(&result.steps).enumerate() {
        if step.next_value != pair[1] {
            errors.push(format!(
                "start {start}: step {index} carries {} but path continues with {}",
                step.next_value, pair[1]
            ));
        }
    }

    errors
}
