//! Versioned rule registry.
//!
//! This module implements typed access to the rule store:
//! - Rule records with effective windows and active flags
//! - Resolution of the single rule in effect on a date
//! - Integrity audit of a snapshot
//! - Well-known rule codes

pub mod codes;
pub mod error;
pub mod registry;
pub mod types;

#[cfg(test)]
mod registry_props;

pub use error::RuleError;
pub use registry::{IntegrityIssue, RuleResolver, RuleSnapshot};
pub use types::{RuleAction, RuleType, RuleValue, TaxRule};
