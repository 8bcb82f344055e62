//! Read-only helper services injected into rule checks.

use crate::CheckConfig;
use veto_core::{AnnotationMirror, AnnotationTypeDecl, MemberValue, TypeName};
use veto_registry::Registry;

/// Stateless lookup helper over annotation mirrors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationApi;

impl AnnotationApi {
    /// Create the helper.
    pub fn new() -> Self {
        Self
    }

    /// Find the first mirror of the given annotation type.
    pub fn mirror<'a>(
        &self,
        mirrors: &'a [AnnotationMirror],
        type_name: &TypeName,
    ) -> Option<&'a AnnotationMirror> {
        mirrors.iter().find(|m| m.type_name() == type_name)
    }

    /// Get the elements of an array-valued member of a mirror.
    ///
    /// Absent and non-array members read as the empty slice.
    pub fn array_value<'a>(&self, mirror: &'a AnnotationMirror, member: &str) -> &'a [MemberValue] {
        mirror.array(member)
    }
}

/// Read-only queries about constraint types, backed by the registry.
///
/// Holds only shared references to immutable state, so copies are cheap
/// and concurrent use is safe.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintHelper<'r> {
    registry: &'r Registry,
    config: &'r CheckConfig,
    annotation_api: AnnotationApi,
}

impl<'r> ConstraintHelper<'r> {
    /// Create a helper over a registry and configuration.
    pub fn new(registry: &'r Registry, config: &'r CheckConfig) -> Self {
        Self {
            registry,
            config,
            annotation_api: AnnotationApi::new(),
        }
    }

    /// Get the backing registry.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Get the check configuration.
    pub fn config(&self) -> &'r CheckConfig {
        self.config
    }

    /// Check if a type name refers to a locally-declared constraint type.
    ///
    /// The marker itself is never a constraint type.
    pub fn is_constraint_type(&self, name: &TypeName) -> bool {
        if name == &self.config.constraint_marker {
            return false;
        }
        self.registry
            .get_by_name(name.as_str())
            .map(|decl| decl.has_meta(&self.config.constraint_marker))
            .unwrap_or(false)
    }

    /// Get the constraint marker mirror on a declaration, if present.
    pub fn constraint_mirror<'a>(
        &self,
        decl: &'a AnnotationTypeDecl,
    ) -> Option<&'a AnnotationMirror> {
        self.annotation_api
            .mirror(decl.metas(), &self.config.constraint_marker)
    }

    /// Check if a declaration is a composed constraint: at least one of
    /// its meta-annotations (other than the marker) is itself a
    /// constraint type.
    pub fn is_composed_constraint(&self, decl: &AnnotationTypeDecl) -> bool {
        !self.composed_parts(decl).is_empty()
    }

    /// Get the composing constraint type names, in mirror order.
    pub fn composed_parts<'a>(&self, decl: &'a AnnotationTypeDecl) -> Vec<&'a TypeName> {
        decl.metas()
            .iter()
            .map(|m| m.type_name())
            .filter(|name| self.is_constraint_type(name))
            .collect()
    }
}
