//! Shared fixtures for unit and property tests.

use chrono::NaiveDate;
use nongsan_shared::types::{Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::rules::codes;
use crate::rules::{RuleAction, RuleSnapshot, RuleType, RuleValue, TaxRule};

/// Date the statutory fixture is evaluated on.
pub fn as_of() -> NaiveDate {
    date(2025, 6, 15)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn effective() -> NaiveDate {
    date(2020, 7, 1)
}

fn amount(code: &str, rule_type: RuleType, action: RuleAction, dong: i64) -> TaxRule {
    TaxRule::new(code, rule_type, action, RuleValue::Amount(Money::from_dong(dong)), effective())
}

fn rate(code: &str, rule_type: RuleType, percent: Decimal) -> TaxRule {
    let rate = Rate::from_percent(percent).unwrap();
    TaxRule::new(code, rule_type, RuleAction::Apply, RuleValue::Rate(rate), effective())
}

fn count(code: &str, rule_type: RuleType, action: RuleAction, n: u32) -> TaxRule {
    TaxRule::new(code, rule_type, action, RuleValue::Count(n), effective())
}

/// Current Vietnamese statutory values, plus one superseded version of the
/// personal deduction.
pub fn statutory_records() -> Vec<TaxRule> {
    let mut rules = vec![
        amount(codes::VAT_CASH_LIMIT, RuleType::Vat, RuleAction::Deny, 20_000_000),
        amount(codes::VAT_ENTERTAINMENT_PER_PERSON, RuleType::Vat, RuleAction::Warn, 500_000),
        count(codes::VAT_VEHICLE_MIN_SEATS, RuleType::Vat, RuleAction::Deny, 9),
        count(codes::VAT_INVOICE_RETENTION_YEARS, RuleType::Vat, RuleAction::Deny, 5),
        TaxRule::new(
            codes::vat_partial("MIXED"),
            RuleType::Vat,
            RuleAction::Partial,
            RuleValue::Rate(Rate::new(dec!(0.6)).unwrap()),
            effective(),
        )
        .with_category("MIXED"),
        amount(codes::CIT_VEHICLE_CAP, RuleType::Cit, RuleAction::Cap, 1_600_000_000),
        rate(codes::CIT_STANDARD_RATE, RuleType::Cit, dec!(20)),
        amount(codes::CIT_ENTERTAINMENT_CAP, RuleType::Cit, RuleAction::Cap, 100_000_000),
        rate(codes::INS_EMPLOYEE_BHXH_RATE, RuleType::Insurance, dec!(8)),
        rate(codes::INS_EMPLOYEE_BHYT_RATE, RuleType::Insurance, dec!(1.5)),
        rate(codes::INS_EMPLOYEE_BHTN_RATE, RuleType::Insurance, dec!(1)),
        rate(codes::INS_EMPLOYER_BHXH_RATE, RuleType::Insurance, dec!(17)),
        rate(codes::INS_EMPLOYER_BHYT_RATE, RuleType::Insurance, dec!(3)),
        rate(codes::INS_EMPLOYER_BHTN_RATE, RuleType::Insurance, dec!(1)),
        rate(codes::INS_EMPLOYER_BHTNLD_RATE, RuleType::Insurance, dec!(0.5)),
        amount(codes::INS_MAX_BASE, RuleType::Insurance, RuleAction::Cap, 46_800_000),
        rate(codes::PAY_OT_NORMAL_RATE, RuleType::Payroll, dec!(150)),
        rate(codes::PAY_OT_WEEKEND_RATE, RuleType::Payroll, dec!(200)),
        rate(codes::PAY_OT_HOLIDAY_RATE, RuleType::Payroll, dec!(300)),
        rate(codes::PAY_NIGHT_BONUS_RATE, RuleType::Payroll, dec!(30)),
        amount(codes::PIT_PERSONAL_DEDUCTION, RuleType::Pit, RuleAction::Apply, 11_000_000),
        TaxRule::new(
            codes::PIT_PERSONAL_DEDUCTION,
            RuleType::Pit,
            RuleAction::Apply,
            RuleValue::Amount(Money::from_dong(9_000_000)),
            date(2013, 7, 1),
        )
        .until(date(2020, 6, 30)),
        amount(codes::PIT_DEPENDENT_DEDUCTION, RuleType::Pit, RuleAction::Apply, 4_400_000),
    ];

    let brackets: [(Option<i64>, Decimal); 7] = [
        (Some(5_000_000), dec!(5)),
        (Some(10_000_000), dec!(10)),
        (Some(18_000_000), dec!(15)),
        (Some(32_000_000), dec!(20)),
        (Some(52_000_000), dec!(25)),
        (Some(80_000_000), dec!(30)),
        (None, dec!(35)),
    ];
    for (i, (upper, percent)) in brackets.into_iter().enumerate() {
        let slot = i + 1;
        rules.push(rate(&codes::pit_bracket_rate(slot), RuleType::Pit, percent));
        if let Some(upper) = upper {
            rules.push(amount(
                &codes::pit_bracket_upper(slot),
                RuleType::Pit,
                RuleAction::Apply,
                upper,
            ));
        }
    }
    rules
}

/// Snapshot of [`statutory_records`].
pub fn statutory_rules() -> RuleSnapshot {
    RuleSnapshot::new(statutory_records())
}

/// Snapshot of [`statutory_records`] without the given codes.
pub fn statutory_rules_without(missing: &[&str]) -> RuleSnapshot {
    RuleSnapshot::new(
        statutory_records()
            .into_iter()
            .filter(|rule| !missing.contains(&rule.code.as_str())),
    )
}
