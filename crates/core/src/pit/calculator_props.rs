//! Property-based tests for progressive tax.

use nongsan_shared::types::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::bracket::BracketTable;
use super::calculator::{marginal_rate, progressive_tax};
use crate::test_support::{as_of, statutory_rules};

fn table() -> BracketTable {
    BracketTable::from_rules(&statutory_rules(), as_of()).unwrap()
}

/// Incomes from zero to 500 million đồng.
fn income() -> impl Strategy<Value = i64> {
    0i64..500_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* non-positive income, tax is zero.
    #[test]
    fn prop_non_positive_income_owes_nothing(income in -500_000_000i64..=0) {
        prop_assert_eq!(progressive_tax(Money::from_dong(income), &table()), Money::ZERO);
    }

    /// *For any* two incomes, the larger one never owes less.
    #[test]
    fn prop_tax_is_monotonic(a in income(), b in income()) {
        let table = table();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            progressive_tax(Money::from_dong(low), &table)
                <= progressive_tax(Money::from_dong(high), &table)
        );
    }

    /// *For any* increment, the extra tax is bounded by the top rate.
    #[test]
    fn prop_tax_is_continuous(x in income(), delta in 0i64..10_000_000) {
        let table = table();
        let before = progressive_tax(Money::from_dong(x), &table);
        let after = progressive_tax(Money::from_dong(x + delta), &table);
        let bound = Money::round(Decimal::from(delta) * table.top_rate().fraction())
            + Money::from_dong(1);
        prop_assert!(after - before <= bound);
    }

    /// *For any* income, tax never exceeds income times the marginal rate.
    #[test]
    fn prop_tax_below_marginal_rate_times_income(x in income()) {
        let table = table();
        let income = Money::from_dong(x);
        let ceiling = Money::round(income.times(marginal_rate(income, &table)));
        prop_assert!(progressive_tax(income, &table) <= ceiling);
    }
}
