//! Filesystem side of initialization.

pub mod init;
