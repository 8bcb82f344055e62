//! Required member check.

use crate::{CheckConfig, ConstraintCheck, Diagnostic, DiagnosticCode, Diagnostics};
use veto_core::{AnnotationMirror, AnnotationTypeDecl};

/// Checks that a constraint type declares every configured required
/// member (conventionally `message`, `groups` and `payload`).
#[derive(Debug)]
pub struct RequiredMembersCheck {
    required: Vec<String>,
}

impl RequiredMembersCheck {
    /// Create the check from the configured member list.
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            required: config.required_members.clone(),
        }
    }
}

impl ConstraintCheck for RequiredMembersCheck {
    fn name(&self) -> &'static str {
        "required-members"
    }

    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        _constraint: &AnnotationMirror,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for member in &self.required {
            if !decl.has_member(member) {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::MissingRequiredMember,
                        format!(
                            "Constraint type '{}' does not declare required member '{}'",
                            decl.name, member
                        ),
                    )
                    .with_decl(decl),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veto_core::MemberDecl;
    use veto_registry::{Registry, RegistryBuilder};

    fn registry_with_members(members: &[&str]) -> Registry {
        let mut builder = RegistryBuilder::new();
        let mut decl = builder
            .add_annotation_type("acme.Positive")
            .meta(AnnotationMirror::new("validation.Constraint"));
        for member in members {
            decl = decl.member(MemberDecl::new(*member, "String"));
        }
        decl.done().unwrap();
        builder.build()
    }

    fn run_check(registry: &Registry, config: &CheckConfig) -> Diagnostics {
        let check = RequiredMembersCheck::new(config);
        let decl = registry.get_by_name("acme.Positive").unwrap();
        let constraint = decl.meta(&config.constraint_marker).unwrap();
        check.check_annotation_type(decl, constraint)
    }

    #[test]
    fn test_all_required_members_declared() {
        // GIVEN all three conventional members
        let registry = registry_with_members(&["message", "groups", "payload"]);
        let config = CheckConfig::default();

        // WHEN / THEN
        assert!(run_check(&registry, &config).is_empty());
    }

    #[test]
    fn test_each_missing_member_reports() {
        // GIVEN only message declared
        let registry = registry_with_members(&["message"]);
        let config = CheckConfig::default();

        // WHEN
        let diagnostics = run_check(&registry, &config);

        // THEN one error per missing member
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .all()
            .iter()
            .all(|d| d.code == DiagnosticCode::MissingRequiredMember && d.is_error()));
    }

    #[test]
    fn test_configured_member_list_respected() {
        // GIVEN a config that only requires message
        let registry = registry_with_members(&["message"]);
        let config = CheckConfig::new().with_required_members(vec!["message".to_string()]);

        // WHEN / THEN
        assert!(run_check(&registry, &config).is_empty());
    }
}
