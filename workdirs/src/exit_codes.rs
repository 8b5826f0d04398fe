//! Stable exit codes for the `workdirs` binary.

/// Directories resolved (and, for `init`, present on disk).
pub const OK: i32 = 0;
/// A filesystem operation failed, or any other error.
pub const FAILED: i32 = 1;
/// The module location could not be made absolute.
pub const UNRESOLVED: i32 = 3;
