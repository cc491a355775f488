//! Discovery configuration stored in `maze.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::engine::DEFAULT_MAX_STEPS;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "maze.toml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Step-by-step breakdown followed by a summary of every path.
    Text,
    /// Pretty-printed JSON array of path results.
    Json,
}

/// Discovery configuration (TOML).
///
/// Missing fields default to the values the interactive front end used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MazeConfig {
    /// Maximum number of steps walked per starting value.
    pub max_steps: usize,

    /// Steps expanded in detail per path in text output.
    pub detail_steps: usize,

    /// Cosmetic pause before results are shown, in milliseconds.
    pub delay_ms: u64,

    /// Strip characters other than digits, commas, whitespace and hyphens
    /// before parsing.
    pub filter_input: bool,

    pub format: OutputFormat,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            detail_steps: 5,
            delay_ms: 0,
            filter_input: false,
            format: OutputFormat::Text,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(anyhow!("max_steps must be > 0"));
        }
        Ok(())
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub max_steps: Option<usize>,
    pub detail_steps: Option<usize>,
    pub delay_ms: Option<u64>,
    pub filter_input: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Apply command-line overrides to a loaded config.
pub fn apply_overrides(mut base: MazeConfig, overrides: &ConfigOverrides) -> Result<MazeConfig> {
    if let Some(max_steps) = overrides.max_steps {
        base.max_steps = max_steps;
    }
    if let Some(detail_steps) = overrides.detail_steps {
        base.detail_steps = detail_steps;
    }
    if let Some(delay_ms) = overrides.delay_ms {
        base.delay_ms = delay_ms;
    }
    if let Some(filter_input) = overrides.filter_input {
        base.filter_input = filter_input;
    }
    if let Some(format) = overrides.format {
        base.format = format;
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `MazeConfig::default()`.
pub fn load_config(path: &Path) -> Result<MazeConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = MazeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: MazeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), max_steps = cfg.max_steps, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &MazeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, MazeConfig::default());
        assert_eq!(cfg.max_steps, 10);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("maze.toml");
        let cfg = MazeConfig {
            max_steps: 25,
            format: OutputFormat::Json,
            ..MazeConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("maze.toml");
        fs::write(&path, "detail_steps = 2\nformat = \"json\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.detail_steps, 2);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.max_steps, 10);
    }

    #[test]
    fn zero_max_steps_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("maze.toml");
        fs::write(&path, "max_steps = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("max_steps must be > 0"));
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = ConfigOverrides {
            max_steps: Some(4),
            filter_input: Some(true),
            ..ConfigOverrides::default()
        };
        let merged = apply_overrides(MazeConfig::default(), &overrides).expect("merge");
        assert_eq!(merged.max_steps, 4);
        assert!(merged.filter_input);
        assert_eq!(merged.detail_steps, 5);
    }

    #[test]
    fn overrides_are_revalidated() {
        let overrides = ConfigOverrides {
            max_steps: Some(0),
            ..ConfigOverrides::default()
        };
        assert!(apply_overrides(MazeConfig::default(), &overrides).is_err());
    }
}
