//! Cost breakdown model.
//!
//! This module defines the [`CostBreakdown`] struct, the immutable result of
//! decomposing a rental duration across the rate tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a rental cost decomposition.
///
/// The tier counts always partition the duration exactly:
/// `months * 30 + weeks * 7 + days == duration_days`. When every configured
/// tier undercuts its daily equivalent, `total_cost <= daily_only_cost` and
/// `savings >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Whole 30-day months charged at the monthly rate.
    pub months: u32,
    /// Whole 7-day weeks charged at the weekly rate.
    pub weeks: u32,
    /// Remaining days charged at the daily rate.
    pub days: u32,
    /// Cost contributed by the monthly tier.
    pub monthly_cost: Decimal,
    /// Cost contributed by the weekly tier.
    pub weekly_cost: Decimal,
    /// Cost contributed by the daily tier.
    pub daily_cost: Decimal,
    /// Sum of the three tier costs.
    pub total_cost: Decimal,
    /// What the rental would cost charged entirely at the daily rate.
    pub daily_only_cost: Decimal,
    /// `daily_only_cost - total_cost`.
    pub savings: Decimal,
}

impl CostBreakdown {
    /// The duration this breakdown partitions, reconstructed from the counts.
    pub fn duration_days(&self) -> u32 {
        self.months * 30 + self.weeks * 7 + self.days
    }
}
