//! Payroll error types.

use nongsan_shared::types::WorkerId;
use nongsan_shared::{AppError, ErrorCategory};
use thiserror::Error;

use crate::rules::RuleError;

/// Payroll-related errors.
///
/// Either kind stops the affected worker only; batches carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Facts were rejected before any computation.
    #[error("Invalid payroll facts for worker {worker_id}: {field} {reason}")]
    InvalidFacts {
        /// Worker the facts belong to.
        worker_id: WorkerId,
        /// Offending field.
        field: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Rules needed for the run could not be resolved.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl PayrollError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFacts { .. } => "PAYROLL_INVALID_FACTS",
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

impl From<PayrollError> for AppError {
    fn from(err: PayrollError) -> Self {
        Self::new(err.category(), err.error_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_invalid_facts_is_validation() {
        let err = PayrollError::InvalidFacts {
            worker_id: WorkerId::new(),
            field: "ot_normal_hours".into(),
            reason: "must not be negative",
        };
        assert_eq!(err.error_code(), "PAYROLL_INVALID_FACTS");

        let app: AppError = err.into();
        assert_eq!(app.category(), ErrorCategory::Validation);
        assert!(!app.requires_operator());
    }

    #[test]
    fn test_rule_error_keeps_its_code() {
        let err = PayrollError::from(RuleError::NotConfigured {
            code: "INS_MAX_BASE".into(),
            as_of: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        });
        assert_eq!(err.error_code(), "RULE_NOT_CONFIGURED");

        let app: AppError = err.into();
        assert!(app.requires_operator());
    }
}
