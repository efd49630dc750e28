//! CIT error types.

use nongsan_shared::{AppError, ErrorCategory};
use thiserror::Error;

use crate::rules::RuleError;

/// CIT-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitError {
    /// Expense or adjustment facts are malformed.
    #[error("Invalid CIT facts: {field} {reason}")]
    InvalidFacts {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A rule needed for the computation could not be resolved.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl CitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFacts { .. } => "CIT_INVALID_FACTS",
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

impl From<CitError> for AppError {
    fn from(err: CitError) -> Self {
        Self::new(err.category(), err.error_code(), err.to_string())
    }
}
