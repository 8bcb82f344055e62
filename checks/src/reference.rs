//! Validator reference format check.

use crate::{
    AnnotationApi, CheckConfig, CheckError, CheckResult, ConstraintCheck, Diagnostic,
    DiagnosticCode, Diagnostics,
};
use regex_lite::Regex;
use veto_core::{AnnotationMirror, AnnotationTypeDecl};

/// Checks that every entry of a constraint type's validator list is a
/// type reference with a well-formed dotted name.
///
/// The configured pattern is compiled once at construction; a pattern
/// that does not compile is a construction error, never a run-time panic.
#[derive(Debug)]
pub struct ValidatorReferenceCheck {
    annotation_api: AnnotationApi,
    validated_by: String,
    pattern: Regex,
}

impl ValidatorReferenceCheck {
    /// Create the check, compiling the configured name pattern.
    pub fn new(annotation_api: AnnotationApi, config: &CheckConfig) -> CheckResult<Self> {
        let pattern = Regex::new(&config.validator_name_pattern).map_err(|e| {
            CheckError::invalid_pattern(&config.validator_name_pattern, e.to_string())
        })?;
        Ok(Self {
            annotation_api,
            validated_by: config.validated_by_member.clone(),
            pattern,
        })
    }
}

impl ConstraintCheck for ValidatorReferenceCheck {
    fn name(&self) -> &'static str {
        "validator-reference"
    }

    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        constraint: &AnnotationMirror,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for entry in self.annotation_api.array_value(constraint, &self.validated_by) {
            let message = match entry.as_type_ref() {
                Some(name) if self.pattern.is_match(name.as_str()) => continue,
                Some(name) => format!(
                    "Validator reference '{}' on constraint type '{}' is not a well-formed type name",
                    name, decl.name
                ),
                None => format!(
                    "Validator entry {} on constraint type '{}' is not a type reference",
                    entry, decl.name
                ),
            };
            diagnostics.push(
                Diagnostic::error(DiagnosticCode::MalformedValidatorReference, message)
                    .with_decl(decl)
                    .with_annotation(constraint),
            );
        }

        diagnostics
    }
}
