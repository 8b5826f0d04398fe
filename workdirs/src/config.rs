//! The shared directory configuration and the location it is derived from.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::layout::{
    INPUT_DIR_NAME, OUTPUT_DIR_NAME, absolutize, base_dir_for, normalize_lexically,
};
use crate::error::WorkDirsError;

/// Compile-time location of this module's source file.
const SOURCE_LOCATION: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/config.rs");

/// File location that anchors the project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocation(PathBuf);

impl ModuleLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Location of this crate's `src/config.rs`, so the base directory is the
    /// crate directory itself.
    pub fn source() -> Self {
        Self::new(SOURCE_LOCATION)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Absolute, lexically normalized form of the location.
    ///
    /// Only relative locations consult the current directory.
    pub fn absolute(&self) -> Result<PathBuf, WorkDirsError> {
        if self.0.is_absolute() {
            return Ok(normalize_lexically(&self.0));
        }
        let cwd = env::current_dir().map_err(WorkDirsError::CurrentDir)?;
        Ok(absolutize(&self.0, &cwd))
    }
}

/// Resolve the base directory (grandparent) of a module location.
pub fn resolve_base_dir(location: &ModuleLocation) -> Result<PathBuf, WorkDirsError> {
    let absolute = location.absolute()?;
    Ok(base_dir_for(&absolute))
}

/// Shared input/output directories of a project.
///
/// Both directories are always direct children of `base_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDirs {
    pub base_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl WorkDirs {
    /// Derive the child directories of `base_dir`. Pure path computation.
    pub fn from_base(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            input_dir: base_dir.join(INPUT_DIR_NAME),
            output_dir: base_dir.join(OUTPUT_DIR_NAME),
            base_dir,
        }
    }

    pub fn resolve(location: &ModuleLocation) -> Result<Self, WorkDirsError> {
        resolve_base_dir(location).map(Self::from_base)
    }

    /// `(name, path)` pairs in creation order.
    pub fn children(&self) -> [(&'static str, &Path); 2] {
        [
            (INPUT_DIR_NAME, self.input_dir.as_path()),
            (OUTPUT_DIR_NAME, self.output_dir.as_path()),
        ]
    }
}
