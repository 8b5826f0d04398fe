//! Shared `input/` and `output/` directories for a project.
//!
//! A project keeps its working data next to its sources:
//!
//! ```text
//! <base_dir>/
//! ├── src/config.rs   <- module location
//! ├── input/
//! └── output/
//! ```
//!
//! The base directory is the grandparent of a module location. The crate is
//! split the same way throughout:
//!
//! - **[`core`]**: Pure path computation. No I/O.
//! - **[`io`]**: Existence checks and directory creation.
//!
//! [`config`] holds the resulting [`WorkDirs`] value. The host calls
//! [`initialize`] once at startup and passes the value to whatever needs it.

pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ModuleLocation, WorkDirs};
pub use error::WorkDirsError;
pub use io::init::{DirStatus, EnsureReport, Initialized, initialize, initialize_from_source};
