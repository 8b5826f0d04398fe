//! Initialization of the shared `input/` and `output/` directories.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::config::{ModuleLocation, WorkDirs};
use crate::error::WorkDirsError;

/// What `ensure_dir` found or did at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

impl DirStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DirStatus::Created => "created",
            DirStatus::Existing => "existing",
        }
    }
}

/// Per-directory outcome of `ensure_dirs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsureReport {
    pub input: DirStatus,
    pub output: DirStatus,
}

impl EnsureReport {
    pub fn created_any(&self) -> bool {
        self.input == DirStatus::Created || self.output == DirStatus::Created
    }
}

/// Result of a completed `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialized {
    pub dirs: WorkDirs,
    pub report: EnsureReport,
}

/// Create `path` as a single directory unless a directory is already there.
///
/// The parent must exist. A concurrent creator winning the race counts as
/// `Existing`.
pub fn ensure_dir(path: &Path) -> Result<DirStatus, WorkDirsError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!(path = %path.display(), "directory exists");
            return Ok(DirStatus::Existing);
        }
        Ok(_) => {
            return Err(WorkDirsError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(WorkDirsError::Create {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    match fs::create_dir(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            Ok(DirStatus::Created)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            debug!(path = %path.display(), "directory created concurrently");
            Ok(DirStatus::Existing)
        }
        Err(source) => Err(WorkDirsError::Create {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Ensure `input_dir` then `output_dir` exist.
///
/// Stops at the first failure, so a missing base directory leaves nothing
/// behind.
pub fn ensure_dirs(dirs: &WorkDirs) -> Result<EnsureReport, WorkDirsError> {
    let input = ensure_dir(&dirs.input_dir)?;
    let output = ensure_dir(&dirs.output_dir)?;
    Ok(EnsureReport { input, output })
}

/// Resolve the layout for `location` and ensure both directories exist.
///
/// Intended to run once during host startup. The returned value is what the
/// rest of the program should be handed.
pub fn initialize(location: &ModuleLocation) -> Result<Initialized, WorkDirsError> {
    let dirs = WorkDirs::resolve(location)?;
    debug!(base_dir = %dirs.base_dir.display(), "resolved base directory");
    let report = ensure_dirs(&dirs)?;
    Ok(Initialized { dirs, report })
}

/// `initialize` anchored at this crate's own source location.
pub fn initialize_from_source() -> Result<Initialized, WorkDirsError> {
    initialize(&ModuleLocation::source())
}
