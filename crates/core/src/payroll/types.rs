//! Payroll domain types.

use nongsan_shared::types::{Money, Period, WorkerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::insurance::InsuranceSplit;

/// How the base salary is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryType {
    /// Fixed amount per month.
    Monthly,
    /// Amount per working day.
    Daily,
    /// Amount per hour.
    Hourly,
}

/// Employment relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerType {
    /// Indefinite-term contract.
    Permanent,
    /// Fixed-term contract.
    Contract,
    /// Probation period.
    Probation,
    /// Harvest or season hire; never insured.
    Seasonal,
}

/// Lifecycle of a payroll record. This engine only produces `Computed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollStatus {
    /// Facts entered, nothing computed.
    Draft,
    /// Amounts computed, not yet in the ledger.
    Computed,
    /// Booked to the ledger.
    Posted,
}

/// An extra payment on top of the base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    /// Label, e.g. "meal" or "fuel".
    pub name: String,
    /// Amount for the period.
    pub amount: Money,
    /// Whether the allowance counts towards taxable income.
    #[serde(default = "default_taxable")]
    pub taxable: bool,
}

fn default_taxable() -> bool {
    true
}

impl Allowance {
    /// Taxable allowance.
    #[must_use]
    pub fn taxable(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            taxable: true,
        }
    }

    /// Allowance exempt from PIT, still paid in gross.
    #[must_use]
    pub fn exempt(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            taxable: false,
        }
    }
}

/// A deduction from net pay, e.g. an advance or a union fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualDeduction {
    /// Why it is deducted.
    pub reason: String,
    /// Amount for the period.
    pub amount: Money,
}

/// Everything known about one worker for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPeriodFacts {
    /// Worker.
    pub worker_id: WorkerId,
    /// Pay period.
    pub period: Period,
    /// How `base_salary` is expressed.
    pub salary_type: SalaryType,
    /// Employment relationship.
    pub worker_type: WorkerType,
    /// Monthly, daily or hourly base depending on `salary_type`.
    pub base_salary: Money,
    /// Days worked; used for daily pay.
    #[serde(default)]
    pub work_days: Decimal,
    /// Hours worked; used for hourly pay.
    #[serde(default)]
    pub work_hours: Decimal,
    /// Weekday overtime hours.
    #[serde(default)]
    pub ot_normal_hours: Decimal,
    /// Weekend overtime hours.
    #[serde(default)]
    pub ot_weekend_hours: Decimal,
    /// Public holiday overtime hours.
    #[serde(default)]
    pub ot_holiday_hours: Decimal,
    /// Hours worked at night.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Allowances for the period.
    #[serde(default)]
    pub allowances: Vec<Allowance>,
    /// Deductions from net pay.
    #[serde(default)]
    pub manual_deductions: Vec<ManualDeduction>,
    /// Contribution base override; defaults to `base_salary`.
    #[serde(default)]
    pub insurance_base: Option<Money>,
    /// Registered dependents.
    #[serde(default)]
    pub dependents_count: u32,
    /// Whether PIT is withheld.
    pub is_subject_to_tax: bool,
}

impl WorkerPeriodFacts {
    /// Facts for a taxable permanent monthly worker with no extras.
    #[must_use]
    pub fn monthly(worker_id: WorkerId, period: Period, base_salary: Money) -> Self {
        Self {
            worker_id,
            period,
            salary_type: SalaryType::Monthly,
            worker_type: WorkerType::Permanent,
            base_salary,
            work_days: Decimal::ZERO,
            work_hours: Decimal::ZERO,
            ot_normal_hours: Decimal::ZERO,
            ot_weekend_hours: Decimal::ZERO,
            ot_holiday_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            allowances: Vec::new(),
            manual_deductions: Vec::new(),
            insurance_base: None,
            dependents_count: 0,
            is_subject_to_tax: true,
        }
    }

    /// Whether statutory insurance applies.
    #[must_use]
    pub fn is_insured(&self) -> bool {
        let insured_salary = match self.salary_type {
            SalaryType::Monthly => true,
            SalaryType::Daily | SalaryType::Hourly => false,
        };
        let insured_worker = match self.worker_type {
            WorkerType::Permanent | WorkerType::Contract | WorkerType::Probation => true,
            WorkerType::Seasonal => false,
        };
        insured_salary && insured_worker
    }
}

/// Overtime amounts, each rounded on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OvertimePay {
    /// Weekday overtime.
    pub normal: Money,
    /// Weekend overtime.
    pub weekend: Money,
    /// Holiday overtime.
    pub holiday: Money,
    /// Night bonus.
    pub night_bonus: Money,
    /// Sum of the above.
    pub total: Money,
}

/// Outcome of composing one worker's payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Worker.
    pub worker_id: WorkerId,
    /// Pay period.
    pub period: Period,
    /// Always [`PayrollStatus::Computed`].
    pub status: PayrollStatus,
    /// Unrounded hourly rate used for overtime.
    pub hourly_rate: Decimal,
    /// Rounded base pay.
    pub base_amount: Money,
    /// Overtime and night bonus.
    pub overtime: OvertimePay,
    /// All allowances.
    pub total_allowance: Money,
    /// Allowances exempt from PIT.
    pub exempt_allowance: Money,
    /// Manual deductions.
    pub total_manual_deduction: Money,
    /// Base, overtime and allowances.
    pub gross: Money,
    /// Whether insurance applied.
    pub is_insured: bool,
    /// Contribution split; all zero when not insured.
    pub insurance: InsuranceSplit,
    /// PIT personal and dependent deductions applied.
    pub family_deduction: Money,
    /// Income the progressive schedule applied to.
    pub taxable_income: Money,
    /// PIT withheld.
    pub tax_amount: Money,
    /// Take-home pay, never negative.
    pub net: Money,
}

impl PayrollResult {
    /// Employee insurance withheld.
    #[must_use]
    pub fn employee_insurance(&self) -> Money {
        self.insurance.employee.total
    }

    /// Employer insurance on top of gross.
    #[must_use]
    pub fn employer_insurance(&self) -> Money {
        self.insurance.employer.total
    }

    /// Total cost to the business.
    #[must_use]
    pub fn employer_cost(&self) -> Money {
        self.gross + self.insurance.employer.total
    }
}
