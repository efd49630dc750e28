//! Straight-line depreciation and disposal.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Period};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::AssetError;
use super::types::{
    Asset, AssetCategory, AssetStatus, DepreciationPosting, DepreciationSchedule, DisposalKind,
    DisposalResult,
};
use crate::rules::RuleResolver;
use crate::rules::codes;

fn ensure_active(asset: &Asset) -> Result<(), AssetError> {
    match asset.status {
        AssetStatus::Active => Ok(()),
        AssetStatus::Disposed | AssetStatus::Sold => Err(AssetError::NotActive {
            asset_id: asset.id,
            status: asset.status,
        }),
    }
}

/// Monthly book and deductible depreciation effective on `as_of`.
///
/// Vehicles costing more than the `CIT_VEHICLE_CAP` rule have their tax
/// base capped; the books still amortise the true cost.
pub fn schedule(
    asset: &Asset,
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Result<DepreciationSchedule, AssetError> {
    let book_base = asset.original_cost;
    let tax_base = match asset.category {
        AssetCategory::Vehicle => {
            let cap = rules.resolve(codes::CIT_VEHICLE_CAP, as_of)?.amount()?;
            book_base.min(cap)
        }
        AssetCategory::Building
        | AssetCategory::Machinery
        | AssetCategory::Equipment
        | AssetCategory::Biological
        | AssetCategory::Other => book_base,
    };

    Ok(straight_line(asset, tax_base))
}

fn straight_line(asset: &Asset, tax_base: Money) -> DepreciationSchedule {
    let book_base = asset.original_cost;
    let months = Decimal::from(asset.useful_life_months);
    DepreciationSchedule {
        book_base,
        tax_base,
        book_monthly: Money::round(book_base.amount() / months),
        tax_monthly: Money::round(tax_base.amount() / months),
        is_capped: tax_base < book_base,
    }
}

/// Computes the posting for `period` without changing the asset.
///
/// A period that is already posted yields a zero repost. The last month of
/// the useful life posts whatever book and deductible value remains, so no
/// rounding residue is left; no posting takes book value below zero.
pub fn depreciate(
    asset: &Asset,
    period: Period,
    rules: &dyn RuleResolver,
) -> Result<DepreciationPosting, AssetError> {
    ensure_active(asset)?;

    if asset.is_posted(period) {
        debug!(asset_id = %asset.id, %period, "period already posted");
        // Reposts read the recorded deductible ceiling, not the rules.
        let tax_base = asset.max_deductible_value.unwrap_or(asset.original_cost);
        return Ok(DepreciationPosting {
            asset_id: asset.id,
            period,
            schedule: straight_line(asset, tax_base),
            book_amount: Money::ZERO,
            tax_amount: Money::ZERO,
            is_repost: true,
            is_final: false,
        });
    }

    if asset.book_value <= Money::ZERO {
        return Err(AssetError::FullyDepreciated(asset.id));
    }
    let schedule = schedule(asset, period.last_day(), rules)?;

    let remaining_tax = (schedule.tax_base - asset.accumulated_tax_depreciation).clamp_zero();
    let life = usize::try_from(asset.useful_life_months).unwrap_or(usize::MAX);
    let last_month = asset.months_posted() + 1 >= life;

    let book_amount = if last_month {
        asset.book_value
    } else {
        schedule.book_monthly.min(asset.book_value)
    };
    // Rounding up can exhaust book value before the last month.
    let is_final = book_amount == asset.book_value;
    let tax_amount = if is_final {
        remaining_tax
    } else {
        schedule.tax_monthly.min(remaining_tax)
    };

    Ok(DepreciationPosting {
        asset_id: asset.id,
        period,
        schedule,
        book_amount,
        tax_amount,
        is_repost: false,
        is_final,
    })
}

/// Computes and books the posting for `period`.
pub fn post_depreciation(
    asset: &mut Asset,
    period: Period,
    rules: &dyn RuleResolver,
) -> Result<DepreciationPosting, AssetError> {
    let posting = depreciate(asset, period, rules)?;
    if asset.apply_posting(&posting) {
        debug!(
            asset_id = %asset.id,
            %period,
            book = %posting.book_amount,
            tax = %posting.tax_amount,
            book_value = %asset.book_value,
            "posted depreciation"
        );
    }
    Ok(posting)
}

/// Takes an active asset off the books.
///
/// Gain or loss is the consideration less the book value at disposal.
pub fn dispose(
    asset: &mut Asset,
    kind: DisposalKind,
    disposed_on: NaiveDate,
) -> Result<DisposalResult, AssetError> {
    ensure_active(asset)?;

    let (status, disposed_value) = match kind {
        DisposalKind::Scrapped => (AssetStatus::Disposed, Money::ZERO),
        DisposalKind::Sold { proceeds } => {
            if proceeds.is_negative() {
                return Err(AssetError::InvalidFacts {
                    field: "proceeds",
                    reason: "must not be negative",
                });
            }
            (AssetStatus::Sold, proceeds)
        }
    };

    asset.status = status;
    let result = DisposalResult {
        asset_id: asset.id,
        status,
        disposed_on,
        disposed_value,
        book_value: asset.book_value,
        gain_loss: disposed_value - asset.book_value,
    };
    info!(
        asset_id = %asset.id,
        status = ?status,
        gain_loss = %result.gain_loss,
        "asset disposed"
    );
    Ok(result)
}
