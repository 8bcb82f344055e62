//! Annotation mirrors.
//!
//! A mirror is one *use* of an annotation: the annotation's type name plus
//! the member values given explicitly at the use site.

use crate::{MemberValue, MemberValues, TypeName};

/// One use of an annotation on a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMirror {
    /// Type name of the annotation being used.
    type_name: TypeName,
    /// Explicit member values at the use site.
    values: MemberValues,
}

impl AnnotationMirror {
    /// Create a mirror with no explicit member values.
    pub fn new(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            values: MemberValues::new(),
        }
    }

    /// Create a mirror with the given member values.
    pub fn with_values(type_name: impl Into<TypeName>, values: MemberValues) -> Self {
        Self {
            type_name: type_name.into(),
            values,
        }
    }

    /// Set a member value.
    pub fn with_value(mut self, member: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        self.values.insert(member.into(), value.into());
        self
    }

    /// Get the annotation's type name.
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Get a member value by name.
    pub fn get(&self, member: &str) -> Option<&MemberValue> {
        self.values.get(member)
    }

    /// Check if a member value is given explicitly.
    pub fn has(&self, member: &str) -> bool {
        self.values.contains_key(member)
    }

    /// Get the elements of an array-valued member.
    ///
    /// Returns the empty slice when the member is absent or not an array,
    /// so callers can treat "no value" and "empty array" uniformly.
    pub fn array(&self, member: &str) -> &[MemberValue] {
        self.values
            .get(member)
            .and_then(|v| v.as_array())
            .unwrap_or(&[])
    }
}
