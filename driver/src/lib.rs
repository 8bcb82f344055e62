//! VETO Driver
//!
//! Runs the registered rule checks over every constraint annotation type
//! in a registry.
//!
//! Responsibilities:
//! - Discover constraint types (declarations carrying the marker)
//! - Invoke every registered check with (declaration, marker mirror)
//! - Union diagnostics, dropping structural duplicates across rules
//! - Order the result deterministically and report run statistics

mod driver;

pub use driver::{CheckDriver, RunOutcome, RunStats};
