//! Errors raised while resolving or creating the shared directories.

use std::io;
use std::path::PathBuf;

/// Errors that can occur during initialization.
///
/// None of these are recovered from locally. The host decides how to fail.
#[derive(Debug, thiserror::Error)]
pub enum WorkDirsError {
    /// A relative module location could not be made absolute.
    #[error("resolve module location: current directory unavailable")]
    CurrentDir(#[source] io::Error),

    /// Checking or creating a directory failed at the filesystem level.
    #[error("create directory {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Something other than a directory already occupies the path.
    #[error("{} exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}
