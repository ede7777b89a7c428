//! Tier activation rules.
//!
//! This module decides whether the monthly and weekly tiers participate in a
//! decomposition. A tier only activates when it is strictly cheaper than
//! covering the same days with the next tier down, or when the next tier
//! down is not configured at all.

use rust_decimal::Decimal;

use crate::models::RatePlan;

/// Number of billed days in a whole month.
pub const DAYS_PER_MONTH: u32 = 30;

/// Number of billed days in a whole week.
pub const DAYS_PER_WEEK: u32 = 7;

/// Whether the monthly tier participates in the decomposition.
///
/// The monthly rate must be configured and strictly cheaper than four weeks
/// at the weekly rate. A plan with no weekly rate lets the monthly tier in
/// unconditionally, since there is nothing cheaper to compare against.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::monthly_tier_active;
/// use rental_pricing::models::RatePlan;
/// use rust_decimal::Decimal;
///
/// let plan = RatePlan {
///     daily_rate: Some(Decimal::new(1000, 0)),
///     weekly_rate: Some(Decimal::new(6000, 0)),
///     monthly_rate: Some(Decimal::new(20000, 0)),
/// };
/// // 20000 < 6000 * 4, so paying monthly beats four weekly charges.
/// assert!(monthly_tier_active(&plan));
/// ```
pub fn monthly_tier_active(plan: &RatePlan) -> bool {
    let monthly = plan.monthly_or_zero();
    let weekly = plan.weekly_or_zero();
    monthly > Decimal::ZERO && (weekly.is_zero() || monthly < weekly * Decimal::from(4))
}

/// Whether the weekly tier participates in the decomposition.
///
/// The weekly rate must be configured and strictly cheaper than seven days
/// at the daily rate. A plan with no daily rate lets the weekly tier in
/// unconditionally.
pub fn weekly_tier_active(plan: &RatePlan) -> bool {
    let weekly = plan.weekly_or_zero();
    let daily = plan.daily_or_zero();
    weekly > Decimal::ZERO && (daily.is_zero() || weekly < daily * Decimal::from(DAYS_PER_WEEK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn plan(daily: &str, weekly: &str, monthly: &str) -> RatePlan {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(dec(s))
            }
        };
        RatePlan {
            daily_rate: opt(daily),
            weekly_rate: opt(weekly),
            monthly_rate: opt(monthly),
        }
    }

    #[test]
    fn test_monthly_active_when_cheaper_than_four_weeks() {
        assert!(monthly_tier_active(&plan("1000", "6000", "20000")));
    }

    #[test]
    fn test_monthly_inactive_at_exactly_four_weeks() {
        // 24000 == 6000 * 4: not strictly cheaper, tier stays off.
        assert!(!monthly_tier_active(&plan("1000", "6000", "24000")));
    }

    #[test]
    fn test_monthly_active_without_weekly_rate() {
        assert!(monthly_tier_active(&plan("1000", "", "29000")));
        assert!(monthly_tier_active(&plan("1000", "0", "29000")));
    }

    #[test]
    fn test_monthly_inactive_when_unset_or_zero() {
        assert!(!monthly_tier_active(&plan("1000", "6000", "")));
        assert!(!monthly_tier_active(&plan("1000", "6000", "0")));
    }

    #[test]
    fn test_weekly_active_when_cheaper_than_seven_days() {
        assert!(weekly_tier_active(&plan("1000", "6000", "")));
    }

    #[test]
    fn test_weekly_inactive_at_exactly_seven_days() {
        assert!(!weekly_tier_active(&plan("1000", "7000", "")));
    }

    #[test]
    fn test_weekly_active_without_daily_rate() {
        assert!(weekly_tier_active(&plan("", "6000", "")));
        assert!(weekly_tier_active(&plan("0", "6000", "")));
    }

    #[test]
    fn test_weekly_inactive_when_unset_or_zero() {
        assert!(!weekly_tier_active(&plan("1000", "", "")));
        assert!(!weekly_tier_active(&plan("1000", "0", "")));
    }
}
