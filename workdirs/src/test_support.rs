//! Test-only helpers for building throwaway projects.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::config::ModuleLocation;

/// A temporary project root containing `src/config.rs`.
///
/// The directory is removed when the value is dropped.
pub struct TestProject {
    _temp: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let root = temp.path().join("project");
        let src = root.join("src");
        fs::create_dir_all(&src).with_context(|| format!("create {}", src.display()))?;
        fs::write(src.join("config.rs"), "").context("write config.rs")?;
        Ok(Self { _temp: temp, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn location_path(&self) -> PathBuf {
        self.root.join("src").join("config.rs")
    }

    pub fn location(&self) -> ModuleLocation {
        ModuleLocation::new(self.location_path())
    }
}
