//! Greedy cost decomposition.
//!
//! This module implements the core pricing operation: splitting a rental
//! duration into whole months, whole weeks, and remaining days at the
//! cheapest combination the fixed month-then-week-then-day order allows.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CostBreakdown, RatePlan};

use super::tier_rules::{DAYS_PER_MONTH, DAYS_PER_WEEK, monthly_tier_active, weekly_tier_active};

/// Decomposes a rental duration into the cheapest month/week/day combination.
///
/// The decomposition is greedy and deterministic: the monthly tier takes as
/// many whole months as fit (when active), the weekly tier takes as many
/// whole weeks as fit from the remainder (when active), and whatever days
/// remain are priced at the daily rate. The remainder is final and is never
/// folded back into a cheaper tier. A plan with no rates configured is not
/// an error; it prices every duration to zero, with the whole duration
/// reported under `days`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDuration`] when `duration_days` is zero,
/// or [`EngineError::InvalidRate`] when a supplied rate is negative. Both
/// are raised before any computation.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::decompose;
/// use rental_pricing::models::RatePlan;
/// use rust_decimal::Decimal;
///
/// let plan = RatePlan {
///     daily_rate: Some(Decimal::new(1000, 0)),
///     weekly_rate: Some(Decimal::new(6000, 0)),
///     monthly_rate: Some(Decimal::new(20000, 0)),
/// };
///
/// let breakdown = decompose(35, &plan).unwrap();
/// assert_eq!(breakdown.months, 1);
/// assert_eq!(breakdown.weeks, 0);
/// assert_eq!(breakdown.days, 5);
/// assert_eq!(breakdown.total_cost, Decimal::new(25000, 0));
/// assert_eq!(breakdown.savings, Decimal::new(10000, 0));
/// ```
pub fn decompose(duration_days: u32, plan: &RatePlan) -> EngineResult<CostBreakdown> {
    if duration_days < 1 {
        return Err(EngineError::InvalidDuration {
            days: duration_days,
        });
    }
    plan.validate()?;

    let daily_rate = plan.daily_or_zero();
    let weekly_rate = plan.weekly_or_zero();
    let monthly_rate = plan.monthly_or_zero();

    let daily_only_cost = daily_rate * Decimal::from(duration_days);

    let mut remaining_days = duration_days;
    let mut months = 0u32;
    let mut weeks = 0u32;

    if monthly_tier_active(plan) {
        months = remaining_days / DAYS_PER_MONTH;
        remaining_days -= months * DAYS_PER_MONTH;
    }

    if weekly_tier_active(plan) {
        weeks = remaining_days / DAYS_PER_WEEK;
        remaining_days -= weeks * DAYS_PER_WEEK;
    }

    let monthly_cost = monthly_rate * Decimal::from(months);
    let weekly_cost = weekly_rate * Decimal::from(weeks);
    let daily_cost = daily_rate * Decimal::from(remaining_days);
    let total_cost = monthly_cost + weekly_cost + daily_cost;

    Ok(CostBreakdown {
        months,
        weeks,
        days: remaining_days,
        monthly_cost,
        weekly_cost,
        daily_cost,
        total_cost,
        daily_only_cost,
        savings: daily_only_cost - total_cost,
    })
}
