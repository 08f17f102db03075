//! Registry Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use reel_models::{RepoModuleId, ServerId};

/// A registry or resolver error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for registry and resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No resolver is registered under this key.
    #[display("module not registered: {_0}")]
    ModuleNotFound(#[error(not(source))] RepoModuleId),
    /// A resolver is already registered under this key.
    #[display("module already registered: {_0}")]
    AlreadyRegistered(#[error(not(source))] RepoModuleId),
    /// The module does not know the requested server.
    #[display("server not found: {_0}")]
    ServerNotFound(#[error(not(source))] ServerId),
    /// The module itself failed while enumerating or resolving.
    #[display("module failure: {_0}")]
    ModuleFailure(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModuleFailure(_))
    }
}
