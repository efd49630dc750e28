//! Insurance configuration and contribution types.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Rate};
use serde::{Deserialize, Serialize};

use crate::rules::codes;
use crate::rules::{RuleError, RuleResolver};

/// Rates and amounts read once per computation.
///
/// Besides insurance rates this carries the overtime multipliers and PIT
/// family deductions, so a payroll run resolves everything it needs in one
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceConfig {
    /// Employee social insurance.
    pub employee_bhxh_rate: Rate,
    /// Employee health insurance.
    pub employee_bhyt_rate: Rate,
    /// Employee unemployment insurance.
    pub employee_bhtn_rate: Rate,
    /// Employer social insurance.
    pub employer_bhxh_rate: Rate,
    /// Employer health insurance.
    pub employer_bhyt_rate: Rate,
    /// Employer unemployment insurance.
    pub employer_bhtn_rate: Rate,
    /// Employer occupational accident insurance.
    pub employer_bhtnld_rate: Rate,
    /// Ceiling on the contribution base.
    pub max_insurance_base: Money,
    /// Weekday overtime multiplier.
    pub ot_normal_rate: Rate,
    /// Weekend overtime multiplier.
    pub ot_weekend_rate: Rate,
    /// Public holiday overtime multiplier.
    pub ot_holiday_rate: Rate,
    /// Extra multiplier paid on night hours.
    pub night_bonus_rate: Rate,
    /// Monthly personal deduction.
    pub personal_deduction: Money,
    /// Monthly deduction per registered dependent.
    pub dependent_deduction: Money,
}

impl InsuranceConfig {
    /// Resolves every field from the rules effective on `as_of`.
    pub fn from_rules(rules: &dyn RuleResolver, as_of: NaiveDate) -> Result<Self, RuleError> {
        let rate = |code: &str| rules.resolve(code, as_of)?.rate();
        let amount = |code: &str| rules.resolve(code, as_of)?.amount();

        Ok(Self {
            employee_bhxh_rate: rate(codes::INS_EMPLOYEE_BHXH_RATE)?,
            employee_bhyt_rate: rate(codes::INS_EMPLOYEE_BHYT_RATE)?,
            employee_bhtn_rate: rate(codes::INS_EMPLOYEE_BHTN_RATE)?,
            employer_bhxh_rate: rate(codes::INS_EMPLOYER_BHXH_RATE)?,
            employer_bhyt_rate: rate(codes::INS_EMPLOYER_BHYT_RATE)?,
            employer_bhtn_rate: rate(codes::INS_EMPLOYER_BHTN_RATE)?,
            employer_bhtnld_rate: rate(codes::INS_EMPLOYER_BHTNLD_RATE)?,
            max_insurance_base: amount(codes::INS_MAX_BASE)?,
            ot_normal_rate: rate(codes::PAY_OT_NORMAL_RATE)?,
            ot_weekend_rate: rate(codes::PAY_OT_WEEKEND_RATE)?,
            ot_holiday_rate: rate(codes::PAY_OT_HOLIDAY_RATE)?,
            night_bonus_rate: rate(codes::PAY_NIGHT_BONUS_RATE)?,
            personal_deduction: amount(codes::PIT_PERSONAL_DEDUCTION)?,
            dependent_deduction: amount(codes::PIT_DEPENDENT_DEDUCTION)?,
        })
    }

    /// Combined employee rate.
    #[must_use]
    pub fn employee_rate(&self) -> Rate {
        self.employee_bhxh_rate + self.employee_bhyt_rate + self.employee_bhtn_rate
    }
}

/// Employee share of contributions. Each component is rounded on its own;
/// `total` is their exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct EmployeeContributions {
    pub bhxh: Money,
    pub bhyt: Money,
    pub bhtn: Money,
    pub total: Money,
}

/// Employer share of contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct EmployerContributions {
    pub bhxh: Money,
    pub bhyt: Money,
    pub bhtn: Money,
    pub bhtnld: Money,
    pub total: Money,
}

/// Contribution split over one capped base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsuranceSplit {
    /// Base actually used, after the ceiling.
    pub base: Money,
    /// Withheld from the worker.
    pub employee: EmployeeContributions,
    /// Paid on top by the business.
    pub employer: EmployerContributions,
}
