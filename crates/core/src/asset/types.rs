//! Fixed asset types.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use nongsan_shared::types::{AssetId, Money, Period};
use serde::{Deserialize, Serialize};

use super::error::AssetError;

/// Asset class. Only vehicles have a deductible base cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    /// Passenger vehicle.
    Vehicle,
    /// Buildings and structures.
    Building,
    /// Production machinery.
    Machinery,
    /// Office and farm equipment.
    Equipment,
    /// Perennial crops and livestock.
    Biological,
    /// Anything else.
    Other,
}

/// Lifecycle of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// In use and depreciating.
    Active,
    /// Scrapped without consideration.
    Disposed,
    /// Sold.
    Sold,
}

/// A fixed asset with book and tax depreciation tracked side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset.
    pub id: AssetId,
    /// Display name.
    pub name: String,
    /// Asset class.
    pub category: AssetCategory,
    /// Acquisition cost.
    pub original_cost: Money,
    /// Straight-line useful life.
    pub useful_life_months: u32,
    /// Book depreciation posted so far.
    pub accumulated_depreciation: Money,
    /// Deductible depreciation posted so far.
    pub accumulated_tax_depreciation: Money,
    /// Cost less book depreciation.
    pub book_value: Money,
    /// Capped deductible base, recorded once a capped schedule posts.
    pub max_deductible_value: Option<Money>,
    /// Lifecycle status.
    pub status: AssetStatus,
    /// Periods already posted.
    #[serde(default)]
    pub posted_periods: BTreeSet<Period>,
}

impl Asset {
    /// Registers a new active asset.
    pub fn new(
        name: impl Into<String>,
        category: AssetCategory,
        original_cost: Money,
        useful_life_months: u32,
    ) -> Result<Self, AssetError> {
        if original_cost.is_negative() || original_cost.is_zero() {
            return Err(AssetError::InvalidFacts {
                field: "original_cost",
                reason: "must be positive",
            });
        }
        if useful_life_months == 0 {
            return Err(AssetError::InvalidFacts {
                field: "useful_life_months",
                reason: "must be positive",
            });
        }
        Ok(Self {
            id: AssetId::new(),
            name: name.into(),
            category,
            original_cost,
            useful_life_months,
            accumulated_depreciation: Money::ZERO,
            accumulated_tax_depreciation: Money::ZERO,
            book_value: original_cost,
            max_deductible_value: None,
            status: AssetStatus::Active,
            posted_periods: BTreeSet::new(),
        })
    }

    /// Months posted so far.
    #[must_use]
    pub fn months_posted(&self) -> usize {
        self.posted_periods.len()
    }

    /// Whether the period was already posted.
    #[must_use]
    pub fn is_posted(&self, period: Period) -> bool {
        self.posted_periods.contains(&period)
    }

    /// Books a posting produced by [`depreciate`](super::depreciate).
    ///
    /// Returns false and changes nothing when the period was already posted
    /// or the posting belongs to another asset.
    pub fn apply_posting(&mut self, posting: &DepreciationPosting) -> bool {
        if posting.asset_id != self.id || posting.is_repost {
            return false;
        }
        if !self.posted_periods.insert(posting.period) {
            return false;
        }
        self.accumulated_depreciation += posting.book_amount;
        self.accumulated_tax_depreciation += posting.tax_amount;
        self.book_value -= posting.book_amount;
        if posting.schedule.is_capped {
            self.max_deductible_value = Some(posting.schedule.tax_base);
        }
        true
    }
}

/// Straight-line monthly figures for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    /// True cost amortised in the books.
    pub book_base: Money,
    /// Base allowed as a deductible expense.
    pub tax_base: Money,
    /// Regular monthly book depreciation.
    pub book_monthly: Money,
    /// Regular monthly deductible depreciation.
    pub tax_monthly: Money,
    /// Whether the tax base was capped below cost.
    pub is_capped: bool,
}

/// Depreciation for one asset and one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationPosting {
    /// Asset.
    pub asset_id: AssetId,
    /// Period posted.
    pub period: Period,
    /// Schedule the amounts came from.
    pub schedule: DepreciationSchedule,
    /// Book depreciation for the period.
    pub book_amount: Money,
    /// Deductible depreciation for the period.
    pub tax_amount: Money,
    /// True when the period was already posted; amounts are zero.
    pub is_repost: bool,
    /// True when this posting closes the useful life.
    pub is_final: bool,
}

impl DepreciationPosting {
    /// Book depreciation that is not deductible.
    #[must_use]
    pub fn non_deductible_excess(&self) -> Money {
        (self.book_amount - self.tax_amount).clamp_zero()
    }
}

/// How an asset leaves the books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisposalKind {
    /// Scrapped or written off.
    Scrapped,
    /// Sold for proceeds.
    Sold {
        /// Sale proceeds.
        proceeds: Money,
    },
}

/// Outcome of a disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalResult {
    /// Asset.
    pub asset_id: AssetId,
    /// Status after disposal.
    pub status: AssetStatus,
    /// Disposal date.
    pub disposed_on: NaiveDate,
    /// Consideration received.
    pub disposed_value: Money,
    /// Book value at disposal.
    pub book_value: Money,
    /// `disposed_value − book_value`; negative for a loss.
    pub gain_loss: Money,
}
