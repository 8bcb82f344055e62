//! Identity types for annotation declarations.
//!
//! Identifiers are 64-bit values that are:
//! - Unique within one registry
//! - Immutable once assigned
//! - Opaque to external users

use std::fmt;

/// Unique identifier for an annotation-type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u64);

impl DeclId {
    /// Create a new DeclId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}
