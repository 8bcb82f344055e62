//! VETO Registry
//!
//! Immutable store of the annotation-type declarations of one compilation
//! unit. The embedding toolchain registers declarations through
//! [`RegistryBuilder`]; rule checks and the driver only ever read.
//!
//! Responsibilities:
//! - Validate declarations at registration time (names, duplicate members)
//! - Look up declarations by id or qualified name
//! - Enumerate all declarations

mod builder;
mod registry;

pub use builder::{AnnotationTypeBuilder, RegistryBuilder, RegistryError, RegistryResult};
pub use registry::Registry;
