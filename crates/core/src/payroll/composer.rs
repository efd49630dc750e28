//! Per-worker payroll composition.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Rate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::PayrollError;
use super::types::{OvertimePay, PayrollResult, PayrollStatus, SalaryType, WorkerPeriodFacts};
use crate::insurance::{InsuranceConfig, InsuranceSplit, contributions};
use crate::pit::{BracketTable, progressive_tax};
use crate::rules::{RuleError, RuleResolver};

/// Standard working days per month for monthly salaries.
const WORK_DAYS_PER_MONTH: u32 = 26;
/// Standard working hours per day.
const WORK_HOURS_PER_DAY: u32 = 8;

/// Everything a payroll run reads from the rule store, resolved once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollRuleSnapshot {
    /// Evaluation date the rules were resolved for.
    pub as_of: NaiveDate,
    /// Insurance rates, overtime multipliers and family deductions.
    pub insurance: InsuranceConfig,
    /// PIT schedule.
    pub brackets: BracketTable,
}

impl PayrollRuleSnapshot {
    /// Resolves the insurance config and bracket table effective on `as_of`.
    pub fn resolve(rules: &dyn RuleResolver, as_of: NaiveDate) -> Result<Self, RuleError> {
        Ok(Self {
            as_of,
            insurance: InsuranceConfig::from_rules(rules, as_of)?,
            brackets: BracketTable::from_rules(rules, as_of)?,
        })
    }

    /// Composes one worker against this snapshot.
    pub fn compose(&self, facts: &WorkerPeriodFacts) -> Result<PayrollResult, PayrollError> {
        compose_payroll(facts, &self.insurance, &self.brackets)
    }
}

/// Rejects facts the composer cannot use.
pub fn validate_facts(facts: &WorkerPeriodFacts) -> Result<(), PayrollError> {
    let invalid = |field: String, reason: &'static str| PayrollError::InvalidFacts {
        worker_id: facts.worker_id,
        field,
        reason,
    };

    if facts.base_salary.is_negative() {
        return Err(invalid("base_salary".into(), "must not be negative"));
    }
    if facts.insurance_base.is_some_and(|base| base.is_negative()) {
        return Err(invalid("insurance_base".into(), "must not be negative"));
    }

    let quantities = [
        ("work_days", facts.work_days),
        ("work_hours", facts.work_hours),
        ("ot_normal_hours", facts.ot_normal_hours),
        ("ot_weekend_hours", facts.ot_weekend_hours),
        ("ot_holiday_hours", facts.ot_holiday_hours),
        ("night_hours", facts.night_hours),
    ];
    for (field, value) in quantities {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid(field.into(), "must not be negative"));
        }
    }

    for (i, allowance) in facts.allowances.iter().enumerate() {
        if allowance.amount.is_negative() {
            return Err(invalid(format!("allowances[{i}].amount"), "must not be negative"));
        }
    }
    for (i, deduction) in facts.manual_deductions.iter().enumerate() {
        if deduction.amount.is_negative() {
            return Err(invalid(
                format!("manual_deductions[{i}].amount"),
                "must not be negative",
            ));
        }
    }
    Ok(())
}

/// Composes gross, insurance, PIT and net pay for one worker.
///
/// Steps:
/// 1. hourly rate from the salary type
/// 2. base pay
/// 3. four overtime amounts, each rounded
/// 4. allowances and manual deductions
/// 5. gross
/// 6. insurance for insured workers
/// 7. PIT for taxable workers
/// 8. net, floored at zero
pub fn compose_payroll(
    facts: &WorkerPeriodFacts,
    config: &InsuranceConfig,
    brackets: &BracketTable,
) -> Result<PayrollResult, PayrollError> {
    validate_facts(facts)?;

    let salary = facts.base_salary.amount();
    let hours_per_day = Decimal::from(WORK_HOURS_PER_DAY);
    let (hourly_rate, base_amount) = match facts.salary_type {
        SalaryType::Monthly => (
            salary / Decimal::from(WORK_DAYS_PER_MONTH) / hours_per_day,
            salary,
        ),
        SalaryType::Daily => (salary / hours_per_day, salary * facts.work_days),
        SalaryType::Hourly => (salary, salary * facts.work_hours),
    };
    let base_amount = Money::round(base_amount);

    let overtime_part = |hours: Decimal, multiplier: Rate| {
        Money::round(hourly_rate * hours * multiplier.fraction())
    };
    let overtime = {
        let normal = overtime_part(facts.ot_normal_hours, config.ot_normal_rate);
        let weekend = overtime_part(facts.ot_weekend_hours, config.ot_weekend_rate);
        let holiday = overtime_part(facts.ot_holiday_hours, config.ot_holiday_rate);
        let night_bonus = overtime_part(facts.night_hours, config.night_bonus_rate);
        OvertimePay {
            normal,
            weekend,
            holiday,
            night_bonus,
            total: normal + weekend + holiday + night_bonus,
        }
    };

    let total_allowance: Money = facts.allowances.iter().map(|a| a.amount).sum();
    let exempt_allowance: Money = facts
        .allowances
        .iter()
        .filter(|a| !a.taxable)
        .map(|a| a.amount)
        .sum();
    let total_manual_deduction: Money = facts.manual_deductions.iter().map(|d| d.amount).sum();

    let gross = base_amount + overtime.total + total_allowance;

    let is_insured = facts.is_insured();
    let insurance = if is_insured {
        contributions(facts.insurance_base.unwrap_or(facts.base_salary), config)
    } else {
        InsuranceSplit::default()
    };
    let employee_insurance = insurance.employee.total;

    let (family_deduction, taxable_income, tax_amount) = if facts.is_subject_to_tax {
        let family = config.personal_deduction + config.dependent_deduction * facts.dependents_count;
        let taxable = (gross - exempt_allowance - employee_insurance - family).clamp_zero();
        (family, taxable, progressive_tax(taxable, brackets))
    } else {
        (Money::ZERO, Money::ZERO, Money::ZERO)
    };

    let net = (gross - employee_insurance - tax_amount - total_manual_deduction).clamp_zero();

    Ok(PayrollResult {
        worker_id: facts.worker_id,
        period: facts.period,
        status: PayrollStatus::Computed,
        hourly_rate,
        base_amount,
        overtime,
        total_allowance,
        exempt_allowance,
        total_manual_deduction,
        gross,
        is_insured,
        insurance,
        family_deduction,
        taxable_income,
        tax_amount,
        net,
    })
}
