//! Errors originating in the validation core.
//!
//! Constraint violations are data ([`crate::ViolationReport`]), never
//! errors. The only failure the core raises itself is a request for a
//! constraint that does not exist.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
