//! Diagnostic records and collections.

use std::fmt;
use veto_core::{AnnotationMirror, AnnotationTypeDecl, DeclId, TypeName};

/// Machine-readable code identifying the kind of finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticCode {
    /// Constraint type declares no validator and is not composed.
    ConstraintTypeWithoutValidator,
    /// The same validator is listed more than once.
    DuplicateValidator,
    /// A composed constraint reaches itself through its composition.
    ComposedConstraintCycle,
    /// A required member is not declared.
    MissingRequiredMember,
    /// A validator reference is not a well-formed type name.
    MalformedValidatorReference,
}

impl DiagnosticCode {
    /// Get the canonical token for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::ConstraintTypeWithoutValidator => "CONSTRAINT_TYPE_WITHOUT_VALIDATOR",
            DiagnosticCode::DuplicateValidator => "DUPLICATE_VALIDATOR",
            DiagnosticCode::ComposedConstraintCycle => "COMPOSED_CONSTRAINT_CYCLE",
            DiagnosticCode::MissingRequiredMember => "MISSING_REQUIRED_MEMBER",
            DiagnosticCode::MalformedValidatorReference => "MALFORMED_VALIDATOR_REFERENCE",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The declaration is structurally broken.
    Error,
    /// The declaration is suspicious but usable.
    Warning,
}

/// An immutable compile-time finding.
///
/// Records derive structural equality and hashing so the driver can
/// deduplicate across rules and callers can assert idempotence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// The kind of finding.
    pub code: DiagnosticCode,
    /// The severity of the finding.
    pub severity: Severity,
    /// Human-readable message describing the finding.
    pub message: String,
    /// Subject declaration ID, if anchored to one.
    pub decl_id: Option<DeclId>,
    /// Subject declaration name, if anchored to one.
    pub decl_name: Option<TypeName>,
    /// Type name of the subject annotation mirror, if anchored to one.
    pub annotation: Option<TypeName>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            decl_id: None,
            decl_name: None,
            annotation: None,
        }
    }

    /// Create an error-level diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    /// Create a warning-level diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, message)
    }

    /// Anchor the diagnostic to a subject declaration.
    pub fn with_decl(mut self, decl: &AnnotationTypeDecl) -> Self {
        self.decl_id = Some(decl.id);
        self.decl_name = Some(decl.name.clone());
        self
    }

    /// Anchor the diagnostic to a subject annotation mirror.
    pub fn with_annotation(mut self, mirror: &AnnotationMirror) -> Self {
        self.annotation = Some(mirror.type_name().clone());
        self
    }

    /// Check if this is an error-level diagnostic.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level diagnostic.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(name) = &self.decl_name {
            write!(f, " (on {})", name)?;
        }
        Ok(())
    }
}

/// Collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if there are any error-level diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.diagnostics.is_empty() && !self.has_errors()
    }

    /// Get all diagnostics.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get error-level diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Get warning-level diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Merge another collection.
    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        // GIVEN/WHEN
        let diagnostic = Diagnostic::error(
            DiagnosticCode::ConstraintTypeWithoutValidator,
            "no validator",
        );

        // THEN
        assert_eq!(
            diagnostic.code,
            DiagnosticCode::ConstraintTypeWithoutValidator
        );
        assert!(diagnostic.is_error());
        assert!(!diagnostic.is_warning());
        assert_eq!(diagnostic.decl_name, None);
    }

    #[test]
    fn test_diagnostic_structural_equality() {
        // GIVEN two diagnostics built independently from the same inputs
        let a = Diagnostic::error(DiagnosticCode::MissingRequiredMember, "missing 'message'");
        let b = Diagnostic::error(DiagnosticCode::MissingRequiredMember, "missing 'message'");

        // THEN they are structurally equal
        assert_eq!(a, b);
    }

    #[test]
    fn test_code_tokens() {
        assert_eq!(
            DiagnosticCode::ConstraintTypeWithoutValidator.as_str(),
            "CONSTRAINT_TYPE_WITHOUT_VALIDATOR"
        );
        assert_eq!(
            DiagnosticCode::ComposedConstraintCycle.to_string(),
            "COMPOSED_CONSTRAINT_CYCLE"
        );
    }

    #[test]
    fn test_diagnostics_has_errors() {
        // GIVEN
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning(
            DiagnosticCode::DuplicateValidator,
            "listed twice",
        ));

        // THEN - only warnings
        assert!(!diagnostics.has_errors());
        assert!(diagnostics.has_only_warnings());

        // WHEN - add an error
        diagnostics.push(Diagnostic::error(
            DiagnosticCode::ConstraintTypeWithoutValidator,
            "no validator",
        ));

        // THEN
        assert!(diagnostics.has_errors());
        assert!(!diagnostics.has_only_warnings());
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(diagnostics.warnings().count(), 1);
    }

    #[test]
    fn test_merge() {
        // GIVEN
        let mut left = Diagnostics::new();
        left.push(Diagnostic::error(
            DiagnosticCode::ConstraintTypeWithoutValidator,
            "a",
        ));
        let mut right = Diagnostics::new();
        right.push(Diagnostic::warning(DiagnosticCode::DuplicateValidator, "b"));

        // WHEN
        left.merge(right);

        // THEN
        assert_eq!(left.len(), 2);
    }
}
