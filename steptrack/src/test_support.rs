//! Test-only helpers for building sequences and steps files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::sequence::StepSequence;

/// Sequence `1..=n`.
pub fn one_to(n: i32) -> StepSequence {
    (1..=n).collect()
}

/// A temp directory holding a single `steps.txt`.
///
/// The directory is removed when this value is dropped.
pub struct StepsFile {
    dir: TempDir,
    path: PathBuf,
}

impl StepsFile {
    /// Write `values` one per line.
    pub fn with_values(values: &[i32]) -> Result<Self> {
        let contents: String = values.iter().map(|v| format!("{v}\n")).collect();
        Self::with_contents(&contents)
    }

    pub fn with_contents(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let path = dir.path().join("steps.txt");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
