//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration flows through them.

use thiserror::Error;

/// The top-level error type for `cv-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field:  &'static str,
        reason: &'static str,
    },
}

/// Shorthand result type for `cv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
