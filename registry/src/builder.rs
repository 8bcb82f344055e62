//! RegistryBuilder for constructing an immutable Registry.

use crate::Registry;
use std::collections::HashMap;
use thiserror::Error;
use veto_core::{AnnotationMirror, AnnotationTypeDecl, DeclId, MemberDecl, ModelError, TypeName};

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate annotation type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate member name '{member}' on annotation type {type_name}")]
    DuplicateMemberName { type_name: String, member: String },

    #[error("Invalid annotation type name: {0}")]
    InvalidName(#[from] ModelError),
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next declaration ID to allocate.
    next_decl_id: u64,
    /// Declarations being built.
    decls: HashMap<DeclId, AnnotationTypeDecl>,
    /// Declaration name to ID mapping.
    names: HashMap<String, DeclId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation-type declaration.
    pub fn add_annotation_type(&mut self, name: impl Into<String>) -> AnnotationTypeBuilder<'_> {
        let name = name.into();
        let id = DeclId::new(self.next_decl_id);
        self.next_decl_id += 1;

        AnnotationTypeBuilder {
            builder: self,
            id,
            name,
            metas: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry::new(self.decls, self.names)
    }
}

/// Scoped builder for one annotation-type declaration.
#[derive(Debug)]
pub struct AnnotationTypeBuilder<'b> {
    builder: &'b mut RegistryBuilder,
    id: DeclId,
    name: String,
    metas: Vec<AnnotationMirror>,
    members: Vec<MemberDecl>,
}

impl AnnotationTypeBuilder<'_> {
    /// Attach a meta-annotation mirror.
    pub fn meta(mut self, mirror: AnnotationMirror) -> Self {
        self.metas.push(mirror);
        self
    }

    /// Declare a member.
    pub fn member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    /// Validate and register the declaration.
    pub fn done(self) -> RegistryResult<DeclId> {
        let name = TypeName::parse(self.name)?;

        if self.builder.names.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateTypeName(name.as_str().to_string()));
        }

        let mut members = HashMap::new();
        for member in self.members {
            if members.contains_key(&member.name) {
                return Err(RegistryError::DuplicateMemberName {
                    type_name: name.as_str().to_string(),
                    member: member.name,
                });
            }
            members.insert(member.name.clone(), member);
        }

        let decl = AnnotationTypeDecl::new(self.id, name.clone(), self.metas, members);
        self.builder.names.insert(name.as_str().to_string(), self.id);
        self.builder.decls.insert(self.id, decl);
        Ok(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veto_core::MemberValue;

    // ========== TEST: register_full_declaration ==========
    #[test]
    fn test_register_full_declaration() {
        // GIVEN
        let mut builder = RegistryBuilder::new();

        // WHEN
        let id = builder
            .add_annotation_type("acme.Positive")
            .meta(
                AnnotationMirror::new("validation.Constraint").with_value(
                    "validatedBy",
                    vec![MemberValue::type_ref("acme.PositiveValidator")],
                ),
            )
            .member(MemberDecl::new("message", "String").with_default("must be positive"))
            .member(MemberDecl::new("groups", "Class[]"))
            .done()
            .unwrap();
        let registry = builder.build();

        // THEN
        let decl = registry.get(id).unwrap();
        assert_eq!(decl.name.as_str(), "acme.Positive");
        assert!(decl.has_meta(&TypeName::new("validation.Constraint")));
        assert!(decl.has_member("message"));
        assert!(decl.has_member("groups"));
    }

    // ========== TEST: duplicate_type_name_error ==========
    #[test]
    fn test_duplicate_type_name_error() {
        // GIVEN registry with acme.Positive
        let mut builder = RegistryBuilder::new();
        builder.add_annotation_type("acme.Positive").done().unwrap();

        // WHEN add another declaration with same name
        let result = builder.add_annotation_type("acme.Positive").done();

        // THEN returns DuplicateTypeName error
        assert!(matches!(result, Err(RegistryError::DuplicateTypeName(_))));
    }

    // ========== TEST: duplicate_member_name_error ==========
    #[test]
    fn test_duplicate_member_name_error() {
        // GIVEN
        let mut builder = RegistryBuilder::new();

        // WHEN a declaration declares the same member twice
        let result = builder
            .add_annotation_type("acme.Positive")
            .member(MemberDecl::new("message", "String"))
            .member(MemberDecl::new("message", "String"))
            .done();

        // THEN returns DuplicateMemberName error
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateMemberName { .. })
        ));
    }

    // ========== TEST: invalid_name_error ==========
    #[test]
    fn test_invalid_name_error() {
        // GIVEN
        let mut builder = RegistryBuilder::new();

        // WHEN a declaration name has an empty segment
        let result = builder.add_annotation_type("acme..Positive").done();

        // THEN the core name error surfaces as InvalidName
        assert!(matches!(result, Err(RegistryError::InvalidName(_))));
    }

    // ========== TEST: mirrors_may_reference_unregistered_types ==========
    #[test]
    fn test_mirrors_may_reference_unregistered_types() {
        // GIVEN a declaration whose meta-annotation type is external
        let mut builder = RegistryBuilder::new();
        let result = builder
            .add_annotation_type("acme.Positive")
            .meta(AnnotationMirror::new("external.Marker"))
            .done();

        // THEN registration succeeds; external references are not resolved
        assert!(result.is_ok());
    }
}
