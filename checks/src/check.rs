//! The polymorphic rule-check capability.

use crate::Diagnostics;
use veto_core::{AnnotationMirror, AnnotationTypeDecl};

/// One structural rule over constraint annotation types.
///
/// Implementations are stateless and side-effect-free; the driver runs
/// every registered rule against every constraint type and unions the
/// diagnostics. `Send + Sync` so a host may fan invocations out across
/// declarations.
pub trait ConstraintCheck: Send + Sync {
    /// Stable name of this rule, for host reporting.
    fn name(&self) -> &'static str;

    /// Check one constraint annotation type.
    ///
    /// `constraint` is the marker mirror found on `decl`; the caller
    /// guarantees it is present there. Returns zero or more diagnostics;
    /// never panics in normal operation.
    fn check_annotation_type(
        &self,
        decl: &AnnotationTypeDecl,
        constraint: &AnnotationMirror,
    ) -> Diagnostics;
}
