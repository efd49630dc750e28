//! Property-based tests for depreciation.

use nongsan_shared::types::{Money, Period};
use proptest::prelude::*;

use super::depreciation::{post_depreciation, schedule};
use super::types::{Asset, AssetCategory};
use crate::test_support::statutory_rules;

fn category() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::Vehicle),
        Just(AssetCategory::Building),
        Just(AssetCategory::Machinery),
        Just(AssetCategory::Equipment),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* asset, postings finish within the useful life, book postings
    /// sum to cost and tax postings sum to the deductible base, and book value
    /// never goes negative on the way.
    #[test]
    fn prop_full_life_amortises_exactly(
        cost in 1i64..5_000_000_000,
        life in 1u32..121,
        category in category(),
    ) {
        let rules = statutory_rules();
        let mut asset = Asset::new("Asset", category, Money::from_dong(cost), life).unwrap();
        let mut period = Period::new(2021, 1).unwrap();
        let tax_base = schedule(&asset, period.last_day(), &rules).unwrap().tax_base;

        let mut book_total = Money::ZERO;
        let mut tax_total = Money::ZERO;
        let mut finished = false;
        for _ in 0..life {
            let posting = post_depreciation(&mut asset, period, &rules).unwrap();
            prop_assert!(!asset.book_value.is_negative());
            prop_assert!(!posting.tax_amount.is_negative());
            book_total += posting.book_amount;
            tax_total += posting.tax_amount;
            period = period.next();
            if posting.is_final {
                finished = true;
                break;
            }
        }

        prop_assert!(finished);
        prop_assert_eq!(book_total, Money::from_dong(cost));
        prop_assert_eq!(tax_total, tax_base);
        prop_assert_eq!(asset.book_value, Money::ZERO);
    }

    /// *For any* sequence of reposts, accumulated depreciation only reflects
    /// distinct periods.
    #[test]
    fn prop_reposting_never_double_counts(
        months in prop::collection::vec(0u32..12, 1..30),
    ) {
        let rules = statutory_rules();
        let mut asset = Asset::new(
            "Tractor",
            AssetCategory::Machinery,
            Money::from_dong(1_200_000_000),
            120,
        )
        .unwrap();
        for m in &months {
            let period = Period::new(2024, m + 1).unwrap();
            post_depreciation(&mut asset, period, &rules).unwrap();
        }

        let distinct = u32::try_from(asset.months_posted()).unwrap();
        prop_assert_eq!(asset.accumulated_depreciation, Money::from_dong(10_000_000) * distinct);
    }
}
