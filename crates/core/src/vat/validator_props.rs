//! Property-based tests for VAT validation.

use nongsan_shared::types::{Money, Rate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{PaymentMethod, VatInvoiceFacts};
use super::validator::validate_vat;
use crate::test_support::{as_of, statutory_rules};

fn payment_method() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::BankTransfer),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::EWallet),
    ]
}

fn vat_rate() -> impl Strategy<Value = Rate> {
    prop_oneof![Just(0i64), Just(5), Just(8), Just(10)]
        .prop_map(|p| Rate::from_percent(Decimal::from(p)).unwrap())
}

prop_compose! {
    fn invoice()(
        goods in 0i64..3_000_000_000,
        rate in vat_rate(),
        method in payment_method(),
        days_ago in 0i64..3000,
        seats in prop::option::of(2u32..50),
        persons in prop::option::of(1u32..30),
        category in prop::option::of(prop_oneof![Just("MIXED"), Just("OFFICE")]),
        has_tax_code in any::<bool>(),
    ) -> VatInvoiceFacts {
        let invoice_date = as_of() - chrono::Duration::days(days_ago);
        let mut facts = VatInvoiceFacts::new(invoice_date, "0312345678", Money::from_dong(goods), rate)
            .paid_by(method);
        if !has_tax_code {
            facts.supplier_tax_code = None;
        }
        facts.is_vehicle = seats.is_some();
        facts.vehicle_seats = seats;
        facts.is_entertainment = persons.is_some();
        facts.number_of_persons = persons;
        facts.usage_category = category.map(str::to_string);
        facts
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* invoice, deductible and non-deductible parts add up to the VAT.
    #[test]
    fn prop_split_adds_up(facts in invoice()) {
        let result = validate_vat(&facts, as_of(), &statutory_rules()).unwrap();
        prop_assert_eq!(
            result.deductible_amount + result.non_deductible_amount,
            facts.vat_amount
        );
        prop_assert!(!result.deductible_amount.is_negative());
        prop_assert!(!result.non_deductible_amount.is_negative());
    }

    /// *For any* invoice, errors and deductibility are mutually exclusive.
    #[test]
    fn prop_errors_block_deduction(facts in invoice()) {
        let result = validate_vat(&facts, as_of(), &statutory_rules()).unwrap();
        prop_assert_eq!(result.is_deductible, result.errors.is_empty());
        if !result.is_deductible {
            prop_assert_eq!(result.deductible_amount, Money::ZERO);
        }
    }

    /// *For any* invoice, warnings never change the verdict: the same invoice
    /// with an invoice number reaches the same deductibility.
    #[test]
    fn prop_warnings_do_not_change_verdict(facts in invoice()) {
        let numbered = facts.clone().numbered("0000001");
        let rules = statutory_rules();
        let without = validate_vat(&facts, as_of(), &rules).unwrap();
        let with = validate_vat(&numbered, as_of(), &rules).unwrap();
        prop_assert_eq!(without.is_deductible, with.is_deductible);
        prop_assert_eq!(without.deductible_amount, with.deductible_amount);
    }
}

