//! Corporate income tax adjustments.
//!
//! This module implements:
//! - Add-backs of non-deductible expenses per category
//! - The vehicle depreciation excess add-back
//! - Aggregation of taxable income and CIT payable

pub mod calculator;
pub mod error;
pub mod types;

pub use calculator::{aggregate_cit, compute_add_backs, depreciation_excess};
pub use error::CitError;
pub use types::{
    AdjustmentType, CitAdjustment, CitContext, CitSummary, Expense, ExpenseCategory,
};
