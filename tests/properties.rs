//! Property-based tests for the cost decomposition.
//!
//! These tests exercise the decomposition invariants over randomly generated
//! durations and rate plans: exact partition of the duration, non-negative
//! outputs, the savings identity, and determinism.

use proptest::prelude::*;
use rust_decimal::Decimal;

use rental_pricing::calculation::decompose;
use rental_pricing::models::RatePlan;

/// Rates drawn as integer amounts; `None` with some probability to cover
/// unconfigured tiers.
fn arb_rate() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(Decimal::ZERO)),
        5 => (0u64..1_000_000).prop_map(|n| Some(Decimal::from(n))),
    ]
}

fn arb_plan() -> impl Strategy<Value = RatePlan> {
    (arb_rate(), arb_rate(), arb_rate()).prop_map(|(daily, weekly, monthly)| RatePlan {
        daily_rate: daily,
        weekly_rate: weekly,
        monthly_rate: monthly,
    })
}

proptest! {
    /// months*30 + weeks*7 + days always reassembles the duration exactly.
    #[test]
    fn partition_is_exact(duration in 1u32..2000, plan in arb_plan()) {
        let breakdown = decompose(duration, &plan).unwrap();
        prop_assert_eq!(
            breakdown.months * 30 + breakdown.weeks * 7 + breakdown.days,
            duration
        );
    }

    /// Every cost field is non-negative.
    #[test]
    fn costs_are_non_negative(duration in 1u32..2000, plan in arb_plan()) {
        let breakdown = decompose(duration, &plan).unwrap();
        prop_assert!(breakdown.monthly_cost >= Decimal::ZERO);
        prop_assert!(breakdown.weekly_cost >= Decimal::ZERO);
        prop_assert!(breakdown.daily_cost >= Decimal::ZERO);
        prop_assert!(breakdown.total_cost >= Decimal::ZERO);
        prop_assert!(breakdown.daily_only_cost >= Decimal::ZERO);
    }

    /// total_cost is the sum of the tier costs.
    #[test]
    fn total_is_sum_of_tiers(duration in 1u32..2000, plan in arb_plan()) {
        let breakdown = decompose(duration, &plan).unwrap();
        prop_assert_eq!(
            breakdown.total_cost,
            breakdown.monthly_cost + breakdown.weekly_cost + breakdown.daily_cost
        );
    }

    /// savings always equals daily_only_cost - total_cost.
    #[test]
    fn savings_identity_holds(duration in 1u32..2000, plan in arb_plan()) {
        let breakdown = decompose(duration, &plan).unwrap();
        prop_assert_eq!(
            breakdown.savings,
            breakdown.daily_only_cost - breakdown.total_cost
        );
    }

    /// When every configured tier undercuts its daily equivalent, the greedy
    /// decomposition never costs more than pricing everything daily, so
    /// savings stay non-negative.
    #[test]
    fn discounted_tiers_never_exceed_daily_only(
        duration in 1u32..2000,
        daily in 1u64..100_000,
        weekly_discount in 1u64..1000,
        monthly_discount in 1u64..1000,
    ) {
        let plan = RatePlan {
            daily_rate: Some(Decimal::from(daily)),
            weekly_rate: Some(Decimal::from((daily * 7).saturating_sub(weekly_discount).max(1))),
            monthly_rate: Some(Decimal::from((daily * 30).saturating_sub(monthly_discount).max(1))),
        };
        let breakdown = decompose(duration, &plan).unwrap();
        prop_assert!(breakdown.total_cost <= breakdown.daily_only_cost);
        prop_assert!(breakdown.savings >= Decimal::ZERO);
    }

    /// Repeat calls with the same inputs are bit-identical.
    #[test]
    fn decomposition_is_deterministic(duration in 1u32..2000, plan in arb_plan()) {
        let first = decompose(duration, &plan).unwrap();
        let second = decompose(duration, &plan).unwrap();
        prop_assert_eq!(first, second);
    }

    /// An empty plan prices every duration to zero with all days left over.
    #[test]
    fn empty_plan_is_degenerate_zero(duration in 1u32..2000) {
        let breakdown = decompose(duration, &RatePlan::default()).unwrap();
        prop_assert_eq!(breakdown.months, 0);
        prop_assert_eq!(breakdown.weeks, 0);
        prop_assert_eq!(breakdown.days, duration);
        prop_assert_eq!(breakdown.total_cost, Decimal::ZERO);
        prop_assert_eq!(breakdown.savings, Decimal::ZERO);
    }
}
