//! Fixed asset depreciation.
//!
//! This module implements:
//! - Asset registration and lifecycle
//! - Book and capped tax schedules
//! - Idempotent monthly posting with a final-month true-up
//! - Disposal and sale with gain or loss

pub mod depreciation;
pub mod error;
pub mod types;

#[cfg(test)]
mod depreciation_props;

pub use depreciation::{depreciate, dispose, post_depreciation, schedule};
pub use error::AssetError;
pub use types::{
    Asset, AssetCategory, AssetStatus, DepreciationPosting, DepreciationSchedule, DisposalKind,
    DisposalResult,
};
