//! Property-based tests for rule resolution.

use chrono::{Duration, NaiveDate};
use nongsan_shared::types::Money;
use proptest::prelude::*;

use super::error::RuleError;
use super::registry::{RuleResolver, RuleSnapshot};
use super::types::{RuleAction, RuleType, RuleValue, TaxRule};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
}

/// Builds back-to-back versions of one rule from window lengths in days.
fn consecutive_versions(lengths: &[i64]) -> Vec<TaxRule> {
    let mut start = base_date();
    let mut versions = Vec::new();
    for (i, days) in lengths.iter().enumerate() {
        let end = start + Duration::days(*days - 1);
        let amount = Money::from_dong(1_000_000 * (i64::try_from(i).unwrap() + 1));
        let mut rule = TaxRule::new(
            "VAT_CASH_LIMIT",
            RuleType::Vat,
            RuleAction::Deny,
            RuleValue::Amount(amount),
            start,
        );
        if i + 1 < lengths.len() {
            rule = rule.until(end);
        }
        versions.push(rule);
        start = end + Duration::days(1);
    }
    versions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* set of back-to-back versions, every date from the first start
    /// resolves to exactly the version whose window contains it.
    #[test]
    fn prop_consecutive_versions_resolve_uniquely(
        lengths in prop::collection::vec(1i64..400, 1..6),
        offset in 0i64..3000,
    ) {
        let versions = consecutive_versions(&lengths);
        let snapshot = RuleSnapshot::new(versions.clone());
        let as_of = base_date() + Duration::days(offset);

        let resolved = snapshot.resolve("VAT_CASH_LIMIT", as_of);
        prop_assert!(resolved.is_ok(), "expected a match on {}: {:?}", as_of, resolved);

        let rule = resolved.unwrap();
        prop_assert!(rule.is_effective_on(as_of));
        let expected = versions.iter().filter(|v| v.is_effective_on(as_of)).count();
        prop_assert_eq!(expected, 1);
        prop_assert!(snapshot.audit().is_empty());
    }

    /// *For any* date before the first version, resolution reports the rule as
    /// not configured instead of falling back to a default.
    #[test]
    fn prop_dates_before_first_version_are_not_configured(
        lengths in prop::collection::vec(1i64..400, 1..6),
        days_before in 1i64..5000,
    ) {
        let snapshot = RuleSnapshot::new(consecutive_versions(&lengths));
        let as_of = base_date() - Duration::days(days_before);

        let is_not_configured = matches!(
            snapshot.resolve("VAT_CASH_LIMIT", as_of),
            Err(RuleError::NotConfigured { .. })
        );
        prop_assert!(is_not_configured);
    }

    /// *For any* duplicated open-ended version, resolution fails as ambiguous
    /// on every date both cover, and the audit flags it.
    #[test]
    fn prop_duplicates_are_ambiguous(
        lengths in prop::collection::vec(1i64..400, 1..6),
        offset in 0i64..3000,
    ) {
        let mut versions = consecutive_versions(&lengths);
        let duplicate = versions.last().cloned().unwrap();
        let start = duplicate.effective_from;
        versions.push(duplicate);
        let snapshot = RuleSnapshot::new(versions);
        let as_of = start + Duration::days(offset);

        let is_ambiguous = matches!(
            snapshot.resolve("VAT_CASH_LIMIT", as_of),
            Err(RuleError::Ambiguous { matches: 2, .. })
        );
        prop_assert!(is_ambiguous);
        prop_assert!(!snapshot.audit().is_empty());
    }
}
