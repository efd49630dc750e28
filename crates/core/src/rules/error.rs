//! Rule registry error types.
//!
//! Every variant here is a configuration failure: the rule store is missing
//! data or holds data the engine cannot use. None of them are retryable
//! until an operator fixes the store.

use chrono::NaiveDate;
use nongsan_shared::{AppError, ErrorCategory};
use thiserror::Error;

/// Errors raised while resolving or interpreting rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// No active rule is effective for the code on the date.
    #[error("No active rule {code} is effective on {as_of}")]
    NotConfigured {
        /// Rule code.
        code: String,
        /// Evaluation date.
        as_of: NaiveDate,
    },

    /// More than one active rule is effective for the code on the date.
    #[error("{matches} active rules {code} are effective on {as_of}")]
    Ambiguous {
        /// Rule code.
        code: String,
        /// Evaluation date.
        as_of: NaiveDate,
        /// Number of matching rules.
        matches: usize,
    },

    /// Rule carries a value of the wrong kind.
    #[error("Rule {code} holds a {found} value, expected {expected}")]
    ValueMismatch {
        /// Rule code.
        code: String,
        /// Value kind the caller needs.
        expected: &'static str,
        /// Value kind the rule holds.
        found: &'static str,
    },

    /// Rule value is of the right kind but outside its legal range.
    #[error("Rule {code} is out of range: {reason}")]
    OutOfRange {
        /// Rule code.
        code: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// Bracket rows do not form an ascending table covering `[0, ∞)`.
    #[error("Invalid tax bracket table: {0}")]
    InvalidBracketTable(String),

    /// Rule snapshot document could not be read.
    #[error("Failed to load rule snapshot: {0}")]
    Load(String),
}

impl RuleError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } => "RULE_NOT_CONFIGURED",
            Self::Ambiguous { .. } => "RULE_AMBIGUOUS",
            Self::ValueMismatch { .. } => "RULE_VALUE_MISMATCH",
            Self::OutOfRange { .. } => "RULE_OUT_OF_RANGE",
            Self::InvalidBracketTable(_) => "INVALID_BRACKET_TABLE",
            Self::Load(_) => "RULE_SNAPSHOT_LOAD_FAILED",
        }
    }
}

impl From<RuleError> for AppError {
    fn from(err: RuleError) -> Self {
        Self::new(ErrorCategory::Configuration, err.error_code(), err.to_string())
    }
}

impl From<config::ConfigError> for RuleError {
    fn from(err: config::ConfigError) -> Self {
        Self::Load(err.to_string())
    }
}
