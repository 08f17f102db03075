//! Model Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A model error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for model construction and decoding.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A transport quality integer is neither the auto sentinel nor positive.
    #[display("malformed quality: {_0}")]
    MalformedQuality(#[error(not(source))] i64),
    /// A custom resolution was not positive, or collides with a reserved value.
    #[display("invalid custom resolution: {_0}")]
    InvalidResolution(#[error(not(source))] i64),
    /// An integer code does not name a member of a fixed enumeration.
    #[display("unknown {field} code: {code}")]
    UnknownCode {
        /// The enumeration being decoded.
        field: &'static str,
        /// The code that was found.
        code: i32,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Decoding is deterministic: the same input fails the same way.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::MalformedQuality(0).to_string(), "malformed quality: 0");
        assert_eq!(
            ErrorKind::InvalidResolution(-5).to_string(),
            "invalid custom resolution: -5"
        );
        assert_eq!(
            ErrorKind::UnknownCode { field: "link format", code: 7 }.to_string(),
            "unknown link format code: 7"
        );
    }

    #[test]
    fn error_kind_never_retryable() {
        assert!(!ErrorKind::MalformedQuality(-1).is_retryable());
        assert!(!ErrorKind::InvalidResolution(0).is_retryable());
        assert!(!ErrorKind::UnknownCode { field: "skip type", code: 3 }.is_retryable());
    }
}
