//! Property-based tests for insurance contributions.

use nongsan_shared::types::Money;
use proptest::prelude::*;

use super::calculator::contributions;
use super::types::InsuranceConfig;
use crate::test_support::{as_of, statutory_rules};

fn config() -> InsuranceConfig {
    InsuranceConfig::from_rules(&statutory_rules(), as_of()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* base, each total equals the sum of its rounded components.
    #[test]
    fn prop_totals_are_exact_sums(base in 0i64..200_000_000) {
        let split = contributions(Money::from_dong(base), &config());
        let employee = split.employee;
        let employer = split.employer;

        prop_assert_eq!(employee.total, employee.bhxh + employee.bhyt + employee.bhtn);
        prop_assert_eq!(
            employer.total,
            employer.bhxh + employer.bhyt + employer.bhtn + employer.bhtnld
        );
    }

    /// *For any* base, the base used never exceeds the ceiling.
    #[test]
    fn prop_base_never_exceeds_ceiling(base in 0i64..500_000_000) {
        let config = config();
        let split = contributions(Money::from_dong(base), &config);

        prop_assert!(split.base <= config.max_insurance_base);
        prop_assert!(split.base <= Money::from_dong(base));
    }

    /// *For any* two bases above the ceiling, contributions are identical.
    #[test]
    fn prop_contributions_flat_above_ceiling(
        a in 46_800_000i64..500_000_000,
        b in 46_800_000i64..500_000_000,
    ) {
        let config = config();
        prop_assert_eq!(
            contributions(Money::from_dong(a), &config),
            contributions(Money::from_dong(b), &config)
        );
    }
}
