//! Common error types for VETO.

use thiserror::Error;

/// Errors that can occur while building model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A type name is empty or has empty segments.
    #[error("Invalid type name: '{name}'")]
    InvalidTypeName { name: String },
}

impl ModelError {
    pub fn invalid_type_name(name: impl Into<String>) -> Self {
        Self::InvalidTypeName { name: name.into() }
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
