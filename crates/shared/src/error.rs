//! Application-wide error types.
//!
//! Every domain error in the engine converts into [`AppError`], which keeps
//! the domain's stable machine-readable code next to a human-readable
//! message.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Broad classification of an error, used to decide who has to act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Rule store is missing data or holds conflicting data. Operator action.
    Configuration,
    /// Submitted facts are malformed. Caller must resubmit.
    Validation,
    /// Entity is in a state that forbids the operation.
    State,
    /// Unexpected failure.
    Internal,
}

impl ErrorCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::State => "state",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rule configuration error.
    #[error("Configuration error [{code}]: {message}")]
    Configuration {
        /// Stable error code.
        code: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// Input validation error.
    #[error("Validation error [{code}]: {message}")]
    Validation {
        /// Stable error code.
        code: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// Entity state forbids the operation.
    #[error("Invalid state [{code}]: {message}")]
    State {
        /// Stable error code.
        code: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds an error of the given category.
    #[must_use]
    pub fn new(category: ErrorCategory, code: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        match category {
            ErrorCategory::Configuration => Self::Configuration { code, message },
            ErrorCategory::Validation => Self::Validation { code, message },
            ErrorCategory::State => Self::State { code, message },
            ErrorCategory::Internal => Self::Internal(message),
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { code, .. }
            | Self::Validation { code, .. }
            | Self::State { code, .. } => *code,
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::State { .. } => ErrorCategory::State,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Returns true if an operator has to fix the rule store before retrying.
    #[must_use]
    pub const fn requires_operator(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
