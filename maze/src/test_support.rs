//! Test-only helpers for scratch directories and config fixtures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::PathResult;
use crate::io::config::{DEFAULT_CONFIG_FILE, MazeConfig, write_config};

/// Temporary working directory removed on drop.
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Path of the default config file inside this directory.
    pub fn config_path(&self) -> PathBuf {
        self.path().join(DEFAULT_CONFIG_FILE)
    }

    /// Write `cfg` as the default config file and return its path.
    pub fn write_config(&self, cfg: &MazeConfig) -> Result<PathBuf> {
        let path = self.config_path();
        write_config(&path, cfg)?;
        Ok(path)
    }
}

/// Config with explicit step limits and default everything else.
pub fn config_with_steps(max_steps: usize, detail_steps: usize) -> MazeConfig {
    MazeConfig {
        max_steps,
        detail_steps,
        ..MazeConfig::default()
    }
}

/// Extract just the visited values of each result.
pub fn paths_of(results: &[PathResult]) -> Vec<Vec<u64>> {
    results.iter().map(|result| result.path.clone()).collect()
}
