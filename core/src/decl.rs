//! Annotation-type declarations.
//!
//! A declaration is a user-defined annotation type: its qualified name,
//! the meta-annotations present on it, and the members it declares.

use crate::{AnnotationMirror, DeclId, MemberValue, TypeName};
use std::collections::HashMap;

/// A member declared by an annotation type.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDecl {
    /// Member name.
    pub name: String,
    /// Declared type of the member.
    pub type_name: TypeName,
    /// Default value, if any.
    pub default: Option<MemberValue>,
}

impl MemberDecl {
    /// Create a member declaration without a default.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, value: impl Into<MemberValue>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A user annotation-type declaration.
#[derive(Debug, Clone)]
pub struct AnnotationTypeDecl {
    /// Unique identifier within the registry.
    pub id: DeclId,
    /// Qualified name of the declared annotation type.
    pub name: TypeName,
    /// Meta-annotations present on the declaration, in source order.
    metas: Vec<AnnotationMirror>,
    /// Declared members by name.
    members: HashMap<String, MemberDecl>,
}

impl AnnotationTypeDecl {
    /// Create a declaration with the given properties.
    pub fn new(
        id: DeclId,
        name: TypeName,
        metas: Vec<AnnotationMirror>,
        members: HashMap<String, MemberDecl>,
    ) -> Self {
        Self {
            id,
            name,
            metas,
            members,
        }
    }

    /// Get the first meta-annotation of the given type, if present.
    pub fn meta(&self, type_name: &TypeName) -> Option<&AnnotationMirror> {
        self.metas.iter().find(|m| m.type_name() == type_name)
    }

    /// Check if a meta-annotation of the given type is present.
    pub fn has_meta(&self, type_name: &TypeName) -> bool {
        self.meta(type_name).is_some()
    }

    /// Get all meta-annotations in source order.
    pub fn metas(&self) -> &[AnnotationMirror] {
        &self.metas
    }

    /// Get a declared member by name.
    pub fn get_member(&self, name: &str) -> Option<&MemberDecl> {
        self.members.get(name)
    }

    /// Check if this declaration declares a member.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Get all declared member names.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(|s| s.as_str())
    }
}
