//! The Registry - immutable declaration lookup.

use std::collections::HashMap;
use veto_core::{AnnotationTypeDecl, DeclId};

/// The Registry provides read-only lookup of annotation-type declarations.
/// It is immutable after construction, and therefore safe for concurrent
/// reads.
#[derive(Debug, Default)]
pub struct Registry {
    /// Declarations by ID.
    decls: HashMap<DeclId, AnnotationTypeDecl>,
    /// Declaration ID lookup by qualified name.
    names: HashMap<String, DeclId>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        decls: HashMap<DeclId, AnnotationTypeDecl>,
        names: HashMap<String, DeclId>,
    ) -> Self {
        Self { decls, names }
    }

    /// Get a declaration by ID.
    pub fn get(&self, id: DeclId) -> Option<&AnnotationTypeDecl> {
        self.decls.get(&id)
    }

    /// Get a declaration by qualified name.
    pub fn get_by_name(&self, name: &str) -> Option<&AnnotationTypeDecl> {
        self.names.get(name).and_then(|id| self.decls.get(id))
    }

    /// Get a declaration ID by qualified name.
    pub fn get_id(&self, name: &str) -> Option<DeclId> {
        self.names.get(name).copied()
    }

    /// Check if a declaration with the given name is registered.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get all declarations. Iteration order is unspecified; consumers
    /// that need determinism sort.
    pub fn all_decls(&self) -> impl Iterator<Item = &AnnotationTypeDecl> {
        self.decls.values()
    }

    /// Get the number of declarations.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }
}
