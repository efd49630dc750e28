//! Payroll composition.
//!
//! This module implements:
//! - Worker period facts and payroll results
//! - Validation of facts before computation
//! - Gross, overtime, insurance, PIT and net composition
//! - Rule snapshots resolved once per run
//! - Parallel batches with per-worker isolation

pub mod batch;
pub mod composer;
pub mod error;
pub mod types;

#[cfg(test)]
mod composer_props;

pub use batch::{PayrollBatchReport, PayrollTotals, WorkerOutcome, run_payroll_batch};
pub use composer::{PayrollRuleSnapshot, compose_payroll, validate_facts};
pub use error::PayrollError;
pub use types::{
    Allowance, ManualDeduction, OvertimePay, PayrollResult, PayrollStatus, SalaryType,
    WorkerPeriodFacts, WorkerType,
};
