//! Configuration Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use reel_models::RepoModuleId;
use std::path::PathBuf;

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration sources could not be read or did not match the schema.
    #[display("invalid configuration: {_0}")]
    Load(#[error(not(source))] String),
    /// The configuration file extension is not one we know how to parse.
    #[display("unsupported configuration format: {}", _0.display())]
    UnsupportedFormat(#[error(not(source))] PathBuf),
    /// The same repo/module pair is listed more than once.
    #[display("module configured more than once: {_0}")]
    DuplicateModule(#[error(not(source))] RepoModuleId),
    /// No path was given and the platform has no configuration directory.
    #[display("could not determine configuration directory")]
    NoConfigDirectory,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Configuration has to be fixed by a human.
        false
    }
}
