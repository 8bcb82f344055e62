//! Check configuration.

use crate::{
    DEFAULT_CONSTRAINT_MARKER, DEFAULT_VALIDATED_BY_MEMBER, DEFAULT_VALIDATOR_NAME_PATTERN,
};
use veto_core::TypeName;

/// Well-known vocabulary the checks are parameterized over.
///
/// The embedding toolchain supplies one instance per run; `Default` gives
/// the conventional names.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Qualified name of the constraint marker meta-annotation.
    pub constraint_marker: TypeName,
    /// Name of the marker member listing validator implementations.
    pub validated_by_member: String,
    /// Members every constraint type must declare.
    pub required_members: Vec<String>,
    /// Pattern a validator reference must match.
    pub validator_name_pattern: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            constraint_marker: TypeName::new(DEFAULT_CONSTRAINT_MARKER),
            validated_by_member: DEFAULT_VALIDATED_BY_MEMBER.to_string(),
            required_members: vec![
                "message".to_string(),
                "groups".to_string(),
                "payload".to_string(),
            ],
            validator_name_pattern: DEFAULT_VALIDATOR_NAME_PATTERN.to_string(),
        }
    }
}

impl CheckConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the constraint marker type name.
    pub fn with_constraint_marker(mut self, marker: impl Into<TypeName>) -> Self {
        self.constraint_marker = marker.into();
        self
    }

    /// Override the validator-list member name.
    pub fn with_validated_by_member(mut self, member: impl Into<String>) -> Self {
        self.validated_by_member = member.into();
        self
    }

    /// Override the required member names.
    pub fn with_required_members(mut self, members: Vec<String>) -> Self {
        self.required_members = members;
        self
    }

    /// Override the validator reference pattern.
    pub fn with_validator_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validator_name_pattern = pattern.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let config = CheckConfig::default();

        assert_eq!(config.constraint_marker.as_str(), "validation.Constraint");
        assert_eq!(config.validated_by_member, "validatedBy");
        assert_eq!(
            config.required_members,
            vec!["message", "groups", "payload"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = CheckConfig::new()
            .with_constraint_marker("acme.Check")
            .with_validated_by_member("checkedBy")
            .with_required_members(vec!["message".to_string()]);

        assert_eq!(config.constraint_marker.as_str(), "acme.Check");
        assert_eq!(config.validated_by_member, "checkedBy");
        assert_eq!(config.required_members, vec!["message"]);
    }
}
