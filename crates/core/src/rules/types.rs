//! Versioned rule records.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Rate};
use serde::{Deserialize, Serialize};

use super::error::RuleError;

/// Tax domain a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Value-added tax.
    Vat,
    /// Personal income tax.
    Pit,
    /// Corporate income tax.
    Cit,
    /// Social, health and unemployment insurance.
    Insurance,
    /// Payroll (overtime and allowances).
    Payroll,
}

/// What the engine does when a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleAction {
    /// Reject the deduction outright.
    Deny,
    /// Raise an advisory warning.
    Warn,
    /// Cap an amount at the rule value.
    Cap,
    /// Allow a proportional deduction.
    Partial,
    /// Apply the rule value as a rate or multiplier.
    Apply,
}

/// The value a rule carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RuleValue {
    /// An amount in đồng.
    Amount(Money),
    /// A rate or multiplier.
    Rate(Rate),
    /// A count (seats, years).
    Count(u32),
}

impl RuleValue {
    /// Name of the value kind, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Amount(_) => "amount",
            Self::Rate(_) => "rate",
            Self::Count(_) => "count",
        }
    }
}

/// One versioned policy fact, e.g. the cash-payment ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRule {
    /// Rule code, e.g. `VAT_CASH_LIMIT`.
    pub code: String,
    /// Tax domain.
    pub rule_type: RuleType,
    /// Free-form grouping used by administrators.
    #[serde(default)]
    pub category: String,
    /// Effect of the rule.
    pub action: RuleAction,
    /// Rule value.
    pub value: RuleValue,
    /// First day the rule is effective.
    pub effective_from: NaiveDate,
    /// Last day the rule is effective, open-ended when absent.
    #[serde(default)]
    pub effective_until: Option<NaiveDate>,
    /// Inactive rules are never resolved.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Legal reference or note.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_active() -> bool {
    true
}

impl TaxRule {
    /// Creates an active, open-ended rule.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule_type: RuleType,
        action: RuleAction,
        value: RuleValue,
        effective_from: NaiveDate,
    ) -> Self {
        Self {
            code: code.into(),
            rule_type,
            category: String::new(),
            action,
            value,
            effective_from,
            effective_until: None,
            is_active: true,
            description: None,
        }
    }

    /// Sets the last effective day.
    #[must_use]
    pub fn until(mut self, effective_until: NaiveDate) -> Self {
        self.effective_until = Some(effective_until);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Marks the rule inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns true if the rule is active and its window contains `date`.
    #[must_use]
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.effective_from <= date
            && self.effective_until.is_none_or(|until| until >= date)
    }

    /// Returns true if both windows share at least one day.
    #[must_use]
    pub fn window_overlaps(&self, other: &Self) -> bool {
        let starts_before_other_ends = other
            .effective_until
            .is_none_or(|until| self.effective_from <= until);
        let other_starts_before_self_ends = self
            .effective_until
            .is_none_or(|until| other.effective_from <= until);
        starts_before_other_ends && other_starts_before_self_ends
    }

    /// Returns the value as an amount.
    pub fn amount(&self) -> Result<Money, RuleError> {
        match self.value {
            RuleValue::Amount(amount) => Ok(amount),
            other => Err(self.mismatch("amount", other)),
        }
    }

    /// Returns the value as a rate.
    pub fn rate(&self) -> Result<Rate, RuleError> {
        match self.value {
            RuleValue::Rate(rate) => Ok(rate),
            other => Err(self.mismatch("rate", other)),
        }
    }

    /// Returns the value as a count.
    pub fn count(&self) -> Result<u32, RuleError> {
        match self.value {
            RuleValue::Count(count) => Ok(count),
            other => Err(self.mismatch("count", other)),
        }
    }

    fn mismatch(&self, expected: &'static str, found: RuleValue) -> RuleError {
        RuleError::ValueMismatch {
            code: self.code.clone(),
            expected,
            found: found.kind(),
        }
    }
}
