//! Qualified type names.

use crate::{ModelError, ModelResult};
use std::fmt;

/// A qualified, dot-separated type name (e.g. `"acme.Positive"`).
///
/// Names are ordered and hashable so diagnostics can be sorted and
/// deduplicated on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a TypeName from a name the caller already knows is well
    /// formed.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parse a candidate name, rejecting empty names and empty segments.
    pub fn parse(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if name.is_empty() || name.split('.').any(|segment| segment.is_empty()) {
            return Err(ModelError::invalid_type_name(name));
        }
        Ok(Self(name))
    }

    /// Get the qualified name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the simple name (the text after the last dot).
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }

    /// Get the package part (the text before the last dot, empty for
    /// unqualified names).
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[..pos],
            None => "",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_parts() {
        let name = TypeName::new("acme.constraints.Positive");

        assert_eq!(name.as_str(), "acme.constraints.Positive");
        assert_eq!(name.simple_name(), "Positive");
        assert_eq!(name.package(), "acme.constraints");
    }

    #[test]
    fn test_unqualified_name_parts() {
        let name = TypeName::new("Positive");

        assert_eq!(name.simple_name(), "Positive");
        assert_eq!(name.package(), "");
    }

    #[test]
    fn test_parse_accepts_well_formed_names() {
        assert!(TypeName::parse("Positive").is_ok());
        assert!(TypeName::parse("acme.Positive").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert!(matches!(
            TypeName::parse(""),
            Err(ModelError::InvalidTypeName { .. })
        ));
        assert!(matches!(
            TypeName::parse("acme..Positive"),
            Err(ModelError::InvalidTypeName { .. })
        ));
        assert!(matches!(
            TypeName::parse(".Positive"),
            Err(ModelError::InvalidTypeName { .. })
        ));
    }
}
