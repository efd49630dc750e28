//! Asset error types.

use nongsan_shared::types::AssetId;
use nongsan_shared::{AppError, ErrorCategory};
use thiserror::Error;

use super::types::AssetStatus;
use crate::rules::RuleError;

/// Asset-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// Asset facts are malformed.
    #[error("Invalid asset facts: {field} {reason}")]
    InvalidFacts {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Asset was disposed or sold.
    #[error("Asset {asset_id} is {status:?} and can no longer change")]
    NotActive {
        /// Asset.
        asset_id: AssetId,
        /// Current status.
        status: AssetStatus,
    },

    /// Book value is already zero.
    #[error("Asset {0} is fully depreciated")]
    FullyDepreciated(AssetId),

    /// A rule needed for the schedule could not be resolved.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl AssetError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFacts { .. } => "ASSET_INVALID_FACTS",
            Self::NotActive { .. } => "ASSET_NOT_ACTIVE",
            Self::FullyDepreciated(_) => "ASSET_FULLY_DEPRECIATED",
            Self::Rule(err) => err.error_code(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFacts { .. } => ErrorCategory::Validation,
            Self::NotActive { .. } | Self::FullyDepreciated(_) => ErrorCategory::State,
            Self::Rule(_) => ErrorCategory::Configuration,
        }
    }
}

impl From<AssetError> for AppError {
    fn from(err: AssetError) -> Self {
        Self::new(err.category(), err.error_code(), err.to_string())
    }
}
