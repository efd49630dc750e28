//! CIT adjustment types.

use nongsan_shared::types::{ExpenseId, Money, Rate};
use serde::{Deserialize, Serialize};

/// Tax treatment class of a booked expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    /// Administrative fines; never deductible.
    AdminPenalty,
    /// Employee welfare; deductible up to one month's average salary.
    Welfare,
    /// Entertainment; deductible up to the `CIT_ENTERTAINMENT_CAP` rule.
    Entertainment,
    /// Book depreciation above the capped deductible figure.
    VehicleDepreciationExcess,
    /// Fully deductible.
    Deductible,
}

impl ExpenseCategory {
    /// Order adjustments are reported in.
    pub const ALL: [Self; 5] = [
        Self::AdminPenalty,
        Self::Welfare,
        Self::Entertainment,
        Self::VehicleDepreciationExcess,
        Self::Deductible,
    ];
}

/// An expense booked in the tax period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense.
    pub id: ExpenseId,
    /// Tax treatment class.
    pub category: ExpenseCategory,
    /// Booked amount.
    pub amount: Money,
}

impl Expense {
    /// Creates an expense with a fresh id.
    #[must_use]
    pub fn new(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            amount,
        }
    }
}

/// Direction of an adjustment to accounting profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    /// Non-deductible expense added back to profit.
    AddBack,
}

/// One adjustment between accounting profit and taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitAdjustment {
    /// Direction.
    pub adjustment_type: AdjustmentType,
    /// Expense class the adjustment comes from.
    pub category: ExpenseCategory,
    /// Amount adjusted.
    pub amount: Money,
}

impl CitAdjustment {
    /// Add-back for a category.
    #[must_use]
    pub const fn add_back(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            adjustment_type: AdjustmentType::AddBack,
            category,
            amount,
        }
    }

    /// Effect on taxable income.
    #[must_use]
    pub fn signed_amount(&self) -> Money {
        match self.adjustment_type {
            AdjustmentType::AddBack => self.amount,
        }
    }
}

/// Period facts the caps depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CitContext {
    /// Average monthly salary over the tax period; caps welfare spend.
    pub average_monthly_salary: Money,
}

/// Corporate income tax for one tax period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitSummary {
    /// Profit before tax adjustments.
    pub accounting_profit: Money,
    /// Sum of add-backs.
    pub total_add_backs: Money,
    /// `accounting_profit + total_add_backs`.
    pub taxable_income: Money,
    /// Rate applied.
    pub tax_rate: Rate,
    /// CIT payable; zero for a loss.
    pub cit_amount: Money,
}
