//! Input VAT deduction validation.
//!
//! This module implements:
//! - Invoice facts and validation outcomes with stable issue codes
//! - Independent deductibility checks driven by rules
//! - Partial deduction by usage category
//! - Parallel batch validation

pub mod error;
pub mod types;
pub mod validator;

#[cfg(test)]
mod validator_props;

pub use error::VatError;
pub use types::{
    IssueSeverity, PaymentMethod, VatInvoiceFacts, VatIssue, VatIssueCode, VatValidationResult,
};
pub use validator::{validate_invoice_facts, validate_vat, validate_vat_batch};
