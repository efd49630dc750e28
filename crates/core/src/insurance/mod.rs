//! Statutory insurance contributions.
//!
//! This module implements:
//! - The insurance and payroll multiplier snapshot loaded from rules
//! - Employee and employer contribution splits over a capped base

pub mod calculator;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::contributions;
pub use types::{EmployeeContributions, EmployerContributions, InsuranceConfig, InsuranceSplit};
