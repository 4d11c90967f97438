//! Tracker configuration loaded from `steptrack.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::layout::RowLayout;
use crate::core::script::ScriptConfig;

/// Tracker configuration (TOML).
///
/// Every field is optional; missing fields fall back to the classic
/// 30-day defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Steps file, relative to the working directory unless absolute.
    pub input_file: PathBuf,

    /// Minimum number of integers the steps file must contain.
    pub min_days: usize,

    /// Right-justified width of each listed value.
    pub field_width: usize,

    /// Values per listing row.
    pub columns: usize,

    /// Size of the sorted top-K report.
    pub top_k: usize,

    /// Amount added to every value by the uniform shift.
    pub shift_delta: i32,

    /// Leading values shown in the stats preview.
    pub preview_len: usize,

    pub script: ScriptConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("steps.txt"),
            min_days: 30,
            field_width: 6,
            columns: 10,
            top_k: 5,
            shift_delta: 100,
            preview_len: 3,
            script: ScriptConfig::default(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(anyhow!("input_file must not be empty"));
        }
        if self.field_width == 0 {
            return Err(anyhow!("field_width must be > 0"));
        }
        if self.columns == 0 {
            return Err(anyhow!("columns must be > 0"));
        }
        Ok(())
    }

    pub fn layout(&self) -> RowLayout {
        RowLayout {
            columns: self.columns,
            width: self.field_width,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TrackerConfig::default()`.
pub fn load_config(path: &Path) -> Result<TrackerConfig> {
    if !path.exists() {
        let cfg = TrackerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TrackerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
