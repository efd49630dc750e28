//! Progressive personal income tax.

use nongsan_shared::types::{Money, Rate};
use rust_decimal::Decimal;

use super::bracket::BracketTable;

/// Computes cumulative tax over a progressive bracket table.
///
/// Each bracket taxes the part of the income that falls inside it. The
/// per-bracket products are summed at full precision and rounded once.
/// Income at or below zero owes nothing.
///
/// # Example
///
/// 15,850,000 over the statutory monthly table:
/// 5,000,000 × 5% + 5,000,000 × 10% + 5,850,000 × 15% = 1,627,500.
#[must_use]
pub fn progressive_tax(taxable_income: Money, brackets: &BracketTable) -> Money {
    if taxable_income <= Money::ZERO {
        return Money::ZERO;
    }

    let mut remaining = taxable_income.amount();
    let mut previous_bound = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for bracket in brackets.iter() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxed_here = match bracket.upper_bound {
            Some(bound) => remaining.min(bound.amount() - previous_bound),
            None => remaining,
        };
        tax += taxed_here * bracket.rate.fraction();
        remaining -= taxed_here;
        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound.amount();
        }
    }

    Money::round(tax)
}

/// Rate applied to the next đồng of income.
#[must_use]
pub fn marginal_rate(taxable_income: Money, brackets: &BracketTable) -> Rate {
    let income = taxable_income.clamp_zero();
    brackets
        .iter()
        .find(|b| b.upper_bound.is_none_or(|bound| income < bound))
        .map_or(Rate::ZERO, |b| b.rate)
}
