//! Duplicate validator check.

use crate::{AnnotationApi, CheckConfig, ConstraintCheck, Diagnostic, DiagnosticCode, Diagnostics};
use std::collections::HashSet;
use veto_core::{AnnotationMirror, AnnotationTypeDecl, TypeName};

/// Warns when the same validator implementation is listed more than once
/// in a constraint type's validator list.
#[derive(Debug)]
pub struct DuplicateValidatorCheck {
    annotation_api: AnnotationApi,
    validated_by: String,
}

impl DuplicateValidatorCheck {
    /// Create the check.
    pub fn new(annotation_api: AnnotationApi, config: &CheckConfig) -> Self {
        Self {
            annotation_api,
            validated_by: config.validated_by_member.clone(),
        }
    }
}

impl ConstraintCheck for DuplicateValidatorCheck {
    fn name(&self) -> &'static str {
        "duplicate-validator"
    }

    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        constraint: &AnnotationMirror,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let mut seen: HashSet<&TypeName> = HashSet::new();
        let mut reported: HashSet<&TypeName> = HashSet::new();

        for entry in self.annotation_api.array_value(constraint, &self.validated_by) {
            let name = match entry.as_type_ref() {
                Some(name) => name,
                // Non-type entries are the reference check's concern
                None => continue,
            };

            if !seen.insert(name) && reported.insert(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticCode::DuplicateValidator,
                        format!(
                            "Validator '{}' is listed more than once on constraint type '{}'",
                            name, decl.name
                        ),
                    )
                    .with_decl(decl)
                    .with_annotation(constraint),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veto_core::MemberValue;
    use veto_registry::{Registry, RegistryBuilder};

    fn registry_with_validators(validators: Vec<MemberValue>) -> Registry {
        let mut builder = RegistryBuilder::new();
        builder
            .add_annotation_type("acme.Positive")
            .meta(
                AnnotationMirror::new("validation.Constraint")
                    .with_value("validatedBy", validators),
            )
            .done()
            .unwrap();
        builder.build()
    }

    fn run_check(registry: &Registry) -> Diagnostics {
        let config = CheckConfig::default();
        let check = DuplicateValidatorCheck::new(AnnotationApi::new(), &config);
        let decl = registry.get_by_name("acme.Positive").unwrap();
        let constraint = decl.meta(&config.constraint_marker).unwrap();
        check.check_annotation_type(decl, constraint)
    }

    #[test]
    fn test_distinct_validators_pass() {
        // GIVEN two distinct validators
        let registry = registry_with_validators(vec![
            MemberValue::type_ref("acme.IntValidator"),
            MemberValue::type_ref("acme.StrValidator"),
        ]);

        // WHEN / THEN
        assert!(run_check(&registry).is_empty());
    }

    #[test]
    fn test_duplicate_validator_warns_once() {
        // GIVEN the same validator listed three times
        let registry = registry_with_validators(vec![
            MemberValue::type_ref("acme.IntValidator"),
            MemberValue::type_ref("acme.IntValidator"),
            MemberValue::type_ref("acme.IntValidator"),
        ]);

        // WHEN
        let diagnostics = run_check(&registry);

        // THEN one warning per duplicated name, not per extra entry
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics.all()[0];
        assert_eq!(diagnostic.code, DiagnosticCode::DuplicateValidator);
        assert!(diagnostic.is_warning());
    }

    #[test]
    fn test_two_duplicated_names_warn_twice() {
        // GIVEN two names, each listed twice
        let registry = registry_with_validators(vec![
            MemberValue::type_ref("acme.IntValidator"),
            MemberValue::type_ref("acme.StrValidator"),
            MemberValue::type_ref("acme.IntValidator"),
            MemberValue::type_ref("acme.StrValidator"),
        ]);

        // WHEN / THEN
        assert_eq!(run_check(&registry).len(), 2);
    }

    #[test]
    fn test_non_type_entries_ignored() {
        // GIVEN a malformed entry among duplicates
        let registry = registry_with_validators(vec![
            MemberValue::Str("oops".into()),
            MemberValue::Str("oops".into()),
        ]);

        // WHEN / THEN - left to the reference check
        assert!(run_check(&registry).is_empty());
    }
}
