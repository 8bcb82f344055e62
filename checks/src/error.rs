//! Check error types.

use thiserror::Error;

/// Errors that can occur while constructing checks.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A configured pattern does not compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl CheckError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for check construction.
pub type CheckResult<T> = Result<T, CheckError>;
