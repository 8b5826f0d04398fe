//! Deterministic path logic.
//!
//! Core modules must be free of I/O side effects. They operate on paths as
//! values and never consult the filesystem or the process environment.

pub mod layout;
