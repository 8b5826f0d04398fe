//! Helpers for deriving the project layout from a module location.

use std::path::{Component, Path, PathBuf};

/// Final path segment of the shared input directory.
pub const INPUT_DIR_NAME: &str = "input";
/// Final path segment of the shared output directory.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` removes the preceding normal component. At the root it is dropped,
/// and in a relative path with nothing left to remove it is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make `path` absolute against `cwd`, then normalize it lexically.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&cwd.join(path))
    }
}

/// Containing directory of the containing directory of `location`.
///
/// `location` must already be absolute and normalized. Climbing stops at the
/// filesystem root, so `/config.rs` and `/` both yield `/`.
pub fn base_dir_for(location: &Path) -> PathBuf {
    let root = location.ancestors().last().unwrap_or(location);
    location.ancestors().nth(2).unwrap_or(root).to_path_buf()
}
