//! Tax and payroll computation engine for Nongsan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every computation is a function of facts, a rule snapshot and an
//! evaluation date.
//!
//! # Modules
//!
//! - `rules` - Versioned rule registry and resolution
//! - `pit` - Progressive personal income tax
//! - `insurance` - Statutory insurance contributions
//! - `payroll` - Gross-to-net payroll composition and batches
//! - `vat` - Input VAT deduction validation
//! - `asset` - Fixed asset depreciation and disposal
//! - `cit` - Corporate income tax add-backs and aggregation

pub mod asset;
pub mod cit;
pub mod insurance;
pub mod payroll;
pub mod pit;
pub mod rules;
pub mod vat;

#[cfg(test)]
mod test_support;
