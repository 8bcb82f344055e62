//! Validator presence check.
//!
//! Every constraint annotation type must name at least one validator
//! implementation in the marker's validator list, unless it is a composed
//! constraint.

use crate::{
    AnnotationApi, ConstraintCheck, ConstraintHelper, Diagnostic, DiagnosticCode, Diagnostics,
};
use veto_core::{AnnotationMirror, AnnotationTypeDecl};

/// Checks that a constraint type which is not a composed constraint names
/// at least one validator implementation.
#[derive(Debug)]
pub struct ValidatorCheck<'r> {
    constraint_helper: ConstraintHelper<'r>,
    annotation_api: AnnotationApi,
    validated_by: String,
}

impl<'r> ValidatorCheck<'r> {
    /// Create the check over the injected helper services.
    pub fn new(constraint_helper: ConstraintHelper<'r>, annotation_api: AnnotationApi) -> Self {
        let validated_by = constraint_helper.config().validated_by_member.clone();
        Self {
            constraint_helper,
            annotation_api,
            validated_by,
        }
    }
}

impl ConstraintCheck for ValidatorCheck<'_> {
    fn name(&self) -> &'static str {
        "validator"
    }

    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        constraint: &AnnotationMirror,
    ) -> Diagnostics {
        let at_least_one_validator_given = !self
            .annotation_api
            .array_value(constraint, &self.validated_by)
            .is_empty();

        let mut diagnostics = Diagnostics::new();

        if !(at_least_one_validator_given || self.constraint_helper.is_composed_constraint(decl)) {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::ConstraintTypeWithoutValidator,
                    format!(
                        "Constraint type '{}' declares no validator and is not composed",
                        decl.name
                    ),
                )
                .with_decl(decl)
                .with_annotation(constraint),
            );
        }

        diagnostics
    }
}
