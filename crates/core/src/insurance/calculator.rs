//! Contribution calculation.

use nongsan_shared::types::{Money, Rate};

use super::types::{EmployeeContributions, EmployerContributions, InsuranceConfig, InsuranceSplit};

/// Splits contributions over `insurance_base`, capped at the configured
/// ceiling.
///
/// Every component is rounded independently and totals are sums of the
/// rounded components, so `total == bhxh + bhyt + bhtn` holds exactly.
/// A non-positive base contributes nothing.
#[must_use]
pub fn contributions(insurance_base: Money, config: &InsuranceConfig) -> InsuranceSplit {
    let base = insurance_base.clamp_zero().min(config.max_insurance_base);
    let part = |rate: Rate| Money::round(base.times(rate));

    let employee = {
        let bhxh = part(config.employee_bhxh_rate);
        let bhyt = part(config.employee_bhyt_rate);
        let bhtn = part(config.employee_bhtn_rate);
        EmployeeContributions {
            bhxh,
            bhyt,
            bhtn,
            total: bhxh + bhyt + bhtn,
        }
    };

    let employer = {
        let bhxh = part(config.employer_bhxh_rate);
        let bhyt = part(config.employer_bhyt_rate);
        let bhtn = part(config.employer_bhtn_rate);
        let bhtnld = part(config.employer_bhtnld_rate);
        EmployerContributions {
            bhxh,
            bhyt,
            bhtn,
            bhtnld,
            total: bhxh + bhyt + bhtn + bhtnld,
        }
    };

    InsuranceSplit {
        base,
        employee,
        employer,
    }
}
