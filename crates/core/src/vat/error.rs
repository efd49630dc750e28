//! VAT validation error types.
//!
//! Rule violations on a well-formed invoice are not errors; they are
//! reported as issues inside the validation result.

use nongsan_shared::{AppError, ErrorCategory};
use thiserror::Error;

use crate::rules::RuleError;

/// Errors that prevent an invoice from being evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VatError {
    /// Invoice facts are malformed.
    #[error("Invalid invoice facts: {field} {reason}")]
    InvalidFacts {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A rule needed by a check could not be resolved.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl VatError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFacts { .. } => "VAT_INVALID_FACTS",
            Self::Rule(err) => err.error_code(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFacts { .. } => ErrorCategory::Validation,
            Self::Rule(_) => ErrorCategory::Configuration,
        }
    }
}

impl From<VatError> for AppError {
    fn from(err: VatError) -> Self {
        Self::new(err.category(), err.error_code(), err.to_string())
    }
}
