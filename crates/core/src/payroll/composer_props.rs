//! Property-based tests for payroll composition.

use nongsan_shared::types::{Money, Period, WorkerId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::composer::PayrollRuleSnapshot;
use super::types::{ManualDeduction, SalaryType, WorkerPeriodFacts, WorkerType};
use crate::test_support::{as_of, statutory_rules};

fn snapshot() -> PayrollRuleSnapshot {
    PayrollRuleSnapshot::resolve(&statutory_rules(), as_of()).unwrap()
}

fn salary_type() -> impl Strategy<Value = SalaryType> {
    prop_oneof![
        Just(SalaryType::Monthly),
        Just(SalaryType::Daily),
        Just(SalaryType::Hourly),
    ]
}

fn worker_type() -> impl Strategy<Value = WorkerType> {
    prop_oneof![
        Just(WorkerType::Permanent),
        Just(WorkerType::Contract),
        Just(WorkerType::Probation),
        Just(WorkerType::Seasonal),
    ]
}

/// Hours in tenths, 0.0 to 100.0.
fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
}

prop_compose! {
    fn facts()(
        salary_type in salary_type(),
        worker_type in worker_type(),
        salary in 0i64..200_000_000,
        days in hours(),
        ot in hours(),
        night in hours(),
        dependents in 0u32..5,
        deduction in 0i64..50_000_000,
        taxable in any::<bool>(),
    ) -> WorkerPeriodFacts {
        let mut facts = WorkerPeriodFacts::monthly(
            WorkerId::new(),
            Period::new(2025, 6).unwrap(),
            Money::from_dong(salary),
        );
        facts.salary_type = salary_type;
        facts.worker_type = worker_type;
        facts.work_days = days;
        facts.work_hours = days;
        facts.ot_normal_hours = ot;
        facts.night_hours = night;
        facts.dependents_count = dependents;
        facts.is_subject_to_tax = taxable;
        facts.manual_deductions = vec![ManualDeduction {
            reason: "advance".into(),
            amount: Money::from_dong(deduction),
        }];
        facts
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* valid facts, net pay is never negative.
    #[test]
    fn prop_net_never_negative(facts in facts()) {
        let result = snapshot().compose(&facts).unwrap();
        prop_assert!(!result.net.is_negative());
        prop_assert!(!result.taxable_income.is_negative());
    }

    /// *For any* valid facts, gross is exactly base plus overtime plus allowances.
    #[test]
    fn prop_gross_is_exact_sum(facts in facts()) {
        let result = snapshot().compose(&facts).unwrap();
        prop_assert_eq!(
            result.gross,
            result.base_amount + result.overtime.total + result.total_allowance
        );
    }

    /// *For any* uninsured worker, every insurance field is zero.
    #[test]
    fn prop_uninsured_workers_pay_nothing(facts in facts()) {
        let result = snapshot().compose(&facts).unwrap();
        if !facts.is_insured() {
            prop_assert_eq!(result.employee_insurance(), Money::ZERO);
            prop_assert_eq!(result.employer_insurance(), Money::ZERO);
        }
    }

    /// *For any* taxable worker, an extra dependent never raises the tax.
    #[test]
    fn prop_dependents_never_raise_tax(facts in facts()) {
        let snapshot = snapshot();
        let mut more = facts.clone();
        more.dependents_count += 1;
        let before = snapshot.compose(&facts).unwrap();
        let after = snapshot.compose(&more).unwrap();
        prop_assert!(after.tax_amount <= before.tax_amount);
    }
}
