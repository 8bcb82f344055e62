//! Composition cycle check.

use crate::{ConstraintCheck, ConstraintHelper, Diagnostic, DiagnosticCode, Diagnostics};
use std::collections::HashSet;
use veto_core::{AnnotationMirror, AnnotationTypeDecl, TypeName};

/// Reports a constraint type whose composition graph reaches back to
/// itself, directly or transitively.
///
/// Only locally-declared constraint types are followed; a reference to an
/// unregistered type ends the walk. The rule runs per declaration, so
/// every declaration on a cycle reports once.
#[derive(Debug)]
pub struct CompositionCycleCheck<'r> {
    constraint_helper: ConstraintHelper<'r>,
}

impl<'r> CompositionCycleCheck<'r> {
    /// Create the check over the injected helper.
    pub fn new(constraint_helper: ConstraintHelper<'r>) -> Self {
        Self { constraint_helper }
    }

    /// Walk the composition graph from `from`, looking for `target`.
    fn reaches(&self, from: &TypeName, target: &TypeName, visited: &mut HashSet<TypeName>) -> bool {
        if !visited.insert(from.clone()) {
            return false;
        }
        let decl = match self.constraint_helper.registry().get_by_name(from.as_str()) {
            Some(decl) => decl,
            None => return false,
        };
        for part in self.constraint_helper.composed_parts(decl) {
            if part == target || self.reaches(part, target, visited) {
                return true;
            }
        }
        false
    }
}

impl ConstraintCheck for CompositionCycleCheck<'_> {
    fn name(&self) -> &'static str {
        "composition-cycle"
    }

    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        constraint: &AnnotationMirror,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let mut visited = HashSet::new();

        for part in self.constraint_helper.composed_parts(decl) {
            if part == &decl.name || self.reaches(part, &decl.name, &mut visited) {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticCode::ComposedConstraintCycle,
                        format!(
                            "Constraint type '{}' composes itself through its meta-annotations",
                            decl.name
                        ),
                    )
                    .with_decl(decl)
                    .with_annotation(constraint),
                );
                break;
            }
        }

        diagnostics
    }
}
