//! Rate plan model.
//!
//! This module defines the [`RatePlan`] struct holding the three optional
//! rate tiers (daily, weekly, monthly) for a rentable asset.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The three optional rate tiers for a rentable asset.
///
/// A plan with no tiers configured is valid: every duration prices to zero
/// (the degenerate case), so callers can always render a breakdown even for
/// assets with no pricing set up yet.
///
/// # Example
///
/// ```
/// use rental_pricing::models::RatePlan;
/// use rust_decimal::Decimal;
///
/// let plan = RatePlan {
///     daily_rate: Some(Decimal::new(1000, 0)),
///     weekly_rate: Some(Decimal::new(6000, 0)),
///     monthly_rate: None,
/// };
/// assert!(plan.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlan {
    /// Rate charged per single day, if configured.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    /// Rate charged per whole week (7 days), if configured.
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    /// Rate charged per whole month (30 days), if configured.
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
}

impl RatePlan {
    /// Checks that every configured rate is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] naming the offending tier when a
    /// supplied rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (tier, rate) in [
            ("daily", self.daily_rate),
            ("weekly", self.weekly_rate),
            ("monthly", self.monthly_rate),
        ] {
            if let Some(rate) = rate {
                if rate.is_sign_negative() && !rate.is_zero() {
                    return Err(EngineError::InvalidRate {
                        tier: tier.to_string(),
                        rate,
                    });
                }
            }
        }
        Ok(())
    }

    /// The daily rate with absent treated as zero.
    pub fn daily_or_zero(&self) -> Decimal {
        self.daily_rate.unwrap_or_default()
    }

    /// The weekly rate with absent treated as zero.
    pub fn weekly_or_zero(&self) -> Decimal {
        self.weekly_rate.unwrap_or_default()
    }

    /// The monthly rate with absent treated as zero.
    pub fn monthly_or_zero(&self) -> Decimal {
        self.monthly_rate.unwrap_or_default()
    }
}
