//! Add-backs and CIT aggregation.

use chrono::NaiveDate;
use nongsan_shared::types::Money;
use tracing::debug;

use super::error::CitError;
use super::types::{CitAdjustment, CitContext, CitSummary, Expense, ExpenseCategory};
use crate::asset::DepreciationPosting;
use crate::rules::RuleResolver;
use crate::rules::codes;

/// Non-deductible portions of the period's expenses, one add-back per
/// category with a non-zero amount.
///
/// - `ADMIN_PENALTY` is added back in full
/// - `WELFARE` above one month's average salary is added back
/// - `ENTERTAINMENT` above the `CIT_ENTERTAINMENT_CAP` rule is added back
/// - `VEHICLE_DEPRECIATION_EXCESS` is added back in full
pub fn compute_add_backs(
    expenses: &[Expense],
    context: &CitContext,
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Result<Vec<CitAdjustment>, CitError> {
    if context.average_monthly_salary.is_negative() {
        return Err(CitError::InvalidFacts {
            field: "average_monthly_salary".into(),
            reason: "must not be negative",
        });
    }
    if let Some(i) = expenses.iter().position(|e| e.amount.is_negative()) {
        return Err(CitError::InvalidFacts {
            field: format!("expenses[{i}].amount"),
            reason: "must not be negative",
        });
    }

    let total = |category: ExpenseCategory| -> Money {
        expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    };

    let mut adjustments = Vec::new();
    for category in ExpenseCategory::ALL {
        let spent = total(category);
        if spent.is_zero() {
            continue;
        }
        let add_back = match category {
            ExpenseCategory::AdminPenalty | ExpenseCategory::VehicleDepreciationExcess => spent,
            ExpenseCategory::Welfare => (spent - context.average_monthly_salary).clamp_zero(),
            ExpenseCategory::Entertainment => {
                let cap = rules.resolve(codes::CIT_ENTERTAINMENT_CAP, as_of)?.amount()?;
                (spent - cap).clamp_zero()
            }
            ExpenseCategory::Deductible => Money::ZERO,
        };
        if !add_back.is_zero() {
            adjustments.push(CitAdjustment::add_back(category, add_back));
        }
    }
    Ok(adjustments)
}

/// Add-back for book depreciation above the capped deductible figure.
#[must_use]
pub fn depreciation_excess(postings: &[DepreciationPosting]) -> Option<CitAdjustment> {
    let excess: Money = postings
        .iter()
        .map(DepreciationPosting::non_deductible_excess)
        .sum();
    (!excess.is_zero())
        .then(|| CitAdjustment::add_back(ExpenseCategory::VehicleDepreciationExcess, excess))
}

/// Taxable income and CIT payable for the period.
///
/// `taxable_income = accounting_profit + Σ add-backs` and
/// `cit_amount = round(taxable_income × CIT_STANDARD_RATE)`, or zero when
/// taxable income is not positive.
pub fn aggregate_cit(
    accounting_profit: Money,
    adjustments: &[CitAdjustment],
    as_of: NaiveDate,
    rules: &dyn RuleResolver,
) -> Result<CitSummary, CitError> {
    if let Some(i) = adjustments.iter().position(|a| a.amount.is_negative()) {
        return Err(CitError::InvalidFacts {
            field: format!("adjustments[{i}].amount"),
            reason: "must not be negative",
        });
    }

    let tax_rate = rules.resolve(codes::CIT_STANDARD_RATE, as_of)?.rate()?;
    let total_add_backs: Money = adjustments.iter().map(CitAdjustment::signed_amount).sum();
    let taxable_income = accounting_profit + total_add_backs;
    let cit_amount = if taxable_income > Money::ZERO {
        Money::round(taxable_income.times(tax_rate))
    } else {
        Money::ZERO
    };

    debug!(
        %as_of,
        profit = %accounting_profit,
        add_backs = %total_add_backs,
        cit = %cit_amount,
        "aggregated CIT"
    );

    Ok(CitSummary {
        accounting_profit,
        total_add_backs,
        taxable_income,
        tax_rate,
        cit_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Asset, AssetCategory, depreciate};
    use crate::test_support::{as_of, statutory_rules, statutory_rules_without};
    use nongsan_shared::types::Period;
    use rstest::rstest;

    fn expense(category: ExpenseCategory, dong: i64) -> Expense {
        Expense::new(category, Money::from_dong(dong))
    }

    fn context() -> CitContext {
        CitContext {
            average_monthly_salary: Money::from_dong(8_000_000),
        }
    }

    #[test]
    fn test_add_backs_per_category() {
        let expenses = vec![
            expense(ExpenseCategory::AdminPenalty, 5_000_000),
            expense(ExpenseCategory::AdminPenalty, 2_000_000),
            expense(ExpenseCategory::Welfare, 12_000_000),
            expense(ExpenseCategory::Entertainment, 130_000_000),
            expense(ExpenseCategory::Deductible, 900_000_000),
        ];
        let adjustments = compute_add_backs(&expenses, &context(), as_of(), &statutory_rules())
            .unwrap();

        assert_eq!(
            adjustments,
            vec![
                CitAdjustment::add_back(ExpenseCategory::AdminPenalty, Money::from_dong(7_000_000)),
                CitAdjustment::add_back(ExpenseCategory::Welfare, Money::from_dong(4_000_000)),
                CitAdjustment::add_back(
                    ExpenseCategory::Entertainment,
                    Money::from_dong(30_000_000)
                ),
            ]
        );
    }

    #[rstest]
    #[case(ExpenseCategory::Welfare, 8_000_000)]
    #[case(ExpenseCategory::Entertainment, 100_000_000)]
    #[case(ExpenseCategory::Deductible, 1_000_000_000)]
    fn test_spend_within_cap_adds_nothing(#[case] category: ExpenseCategory, #[case] dong: i64) {
        let adjustments = compute_add_backs(
            &[expense(category, dong)],
            &context(),
            as_of(),
            &statutory_rules(),
        )
        .unwrap();
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_entertainment_cap_only_resolved_when_needed() {
        let rules = statutory_rules_without(&[codes::CIT_ENTERTAINMENT_CAP]);
        let ok = compute_add_backs(
            &[expense(ExpenseCategory::AdminPenalty, 1)],
            &context(),
            as_of(),
            &rules,
        );
        assert!(ok.is_ok());

        let err = compute_add_backs(
            &[expense(ExpenseCategory::Entertainment, 1)],
            &context(),
            as_of(),
            &rules,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "RULE_NOT_CONFIGURED");
    }

    #[test]
    fn test_aggregate_cit() {
        let adjustments = vec![
            CitAdjustment::add_back(ExpenseCategory::AdminPenalty, Money::from_dong(7_000_000)),
            CitAdjustment::add_back(ExpenseCategory::Welfare, Money::from_dong(4_000_000)),
        ];
        let summary = aggregate_cit(
            Money::from_dong(489_000_003),
            &adjustments,
            as_of(),
            &statutory_rules(),
        )
        .unwrap();

        assert_eq!(summary.total_add_backs, Money::from_dong(11_000_000));
        assert_eq!(summary.taxable_income, Money::from_dong(500_000_003));
        // 100,000,000.6
        assert_eq!(summary.cit_amount, Money::from_dong(100_000_001));
    }

    #[test]
    fn test_loss_year_owes_nothing() {
        let adjustments = vec![CitAdjustment::add_back(
            ExpenseCategory::AdminPenalty,
            Money::from_dong(10_000_000),
        )];
        let summary = aggregate_cit(
            Money::from_dong(-50_000_000),
            &adjustments,
            as_of(),
            &statutory_rules(),
        )
        .unwrap();

        assert_eq!(summary.taxable_income, Money::from_dong(-40_000_000));
        assert_eq!(summary.cit_amount, Money::ZERO);
    }

    #[test]
    fn test_vehicle_depreciation_excess() {
        let rules = statutory_rules();
        let vehicle = Asset::new(
            "Sedan",
            AssetCategory::Vehicle,
            Money::from_dong(2_000_000_000),
            60,
        )
        .unwrap();
        let postings: Vec<_> = [6, 7]
            .into_iter()
            .map(|m| depreciate(&vehicle, Period::new(2025, m).unwrap(), &rules).unwrap())
            .collect();

        let adjustment = depreciation_excess(&postings).unwrap();
        assert_eq!(adjustment.category, ExpenseCategory::VehicleDepreciationExcess);
        assert_eq!(adjustment.amount, Money::from_dong(13_333_332));
    }

    #[test]
    fn test_uncapped_assets_have_no_excess() {
        let rules = statutory_rules();
        let tractor = Asset::new(
            "Tractor",
            AssetCategory::Machinery,
            Money::from_dong(2_000_000_000),
            60,
        )
        .unwrap();
        let posting = depreciate(&tractor, Period::new(2025, 6).unwrap(), &rules).unwrap();
        assert!(depreciation_excess(&[posting]).is_none());
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let err = compute_add_backs(
            &[expense(ExpenseCategory::Welfare, -1)],
            &context(),
            as_of(),
            &statutory_rules(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "CIT_INVALID_FACTS");

        let negative = CitAdjustment::add_back(ExpenseCategory::Welfare, Money::from_dong(-1));
        let err = aggregate_cit(Money::ZERO, &[negative], as_of(), &statutory_rules()).unwrap_err();
        assert!(matches!(err, CitError::InvalidFacts { .. }));
    }
}
