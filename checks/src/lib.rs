//! VETO Checks
//!
//! Structural rule checks over constraint annotation types.
//!
//! Responsibilities:
//! - Define the diagnostic model (codes, severities, records)
//! - Define the polymorphic check capability ([`ConstraintCheck`])
//! - Provide the built-in rule checks
//! - Provide the read-only helper services the checks are built on
//!
//! Checks are stateless and side-effect-free: a check reads the
//! declaration and its constraint marker mirror, and returns diagnostics
//! as data. New structural rules are added by implementing
//! [`ConstraintCheck`] and registering with the driver, without touching
//! existing rules.

mod check;
mod config;
mod cycle;
mod diagnostic;
mod duplicate;
mod error;
mod helper;
mod reference;
mod required;
mod validator;

pub use check::ConstraintCheck;
pub use config::CheckConfig;
pub use cycle::CompositionCycleCheck;
pub use diagnostic::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use duplicate::DuplicateValidatorCheck;
pub use error::{CheckError, CheckResult};
pub use helper::{AnnotationApi, ConstraintHelper};
pub use reference::ValidatorReferenceCheck;
pub use required::RequiredMembersCheck;
pub use validator::ValidatorCheck;

/// Default qualified name of the constraint marker meta-annotation.
pub const DEFAULT_CONSTRAINT_MARKER: &str = "validation.Constraint";

/// Default name of the marker member listing validator implementations.
pub const DEFAULT_VALIDATED_BY_MEMBER: &str = "validatedBy";

/// Default pattern a validator reference must match (dotted identifiers).
pub const DEFAULT_VALIDATOR_NAME_PATTERN: &str =
    r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$";
