//! Request types for the Rental Pricing Engine API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RatePlan, UsagePeriod};

/// Request body for the `/quote` endpoint.
///
/// The rate plan comes from exactly one of two sources: a catalog asset
/// (`asset_id`) or inline rates (`rates`). The usage period is either a
/// plain `duration_days` or an inclusive `start_date`/`end_date` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Catalog asset to price, if quoting from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// Inline rate tiers, if quoting ad hoc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RatesRequest>,
    /// The usage period to price.
    pub period: PeriodRequest,
}

/// Inline rate tiers in a quote request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesRequest {
    /// Rate per day, if offered.
    #[serde(default)]
    pub daily: Option<Decimal>,
    /// Rate per whole week, if offered.
    #[serde(default)]
    pub weekly: Option<Decimal>,
    /// Rate per whole month, if offered.
    #[serde(default)]
    pub monthly: Option<Decimal>,
}

/// Usage period information in a quote request.
///
/// Supplied as either `duration_days` or both `start_date` and `end_date`;
/// the handler rejects requests that mix the two forms or give neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The number of rental days.
    #[serde(default)]
    pub duration_days: Option<u32>,
    /// The first rental day.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The last rental day, inclusive.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<RatesRequest> for RatePlan {
    fn from(req: RatesRequest) -> Self {
        RatePlan {
            daily_rate: req.daily,
            weekly_rate: req.weekly,
            monthly_rate: req.monthly,
        }
    }
}

impl PeriodRequest {
    /// Resolves the request into a [`UsagePeriod`], or a message describing
    /// what is wrong with the combination of fields.
    pub fn resolve(&self) -> Result<UsagePeriod, String> {
        match (self.duration_days, self.start_date, self.end_date) {
            (Some(duration_days), None, None) => Ok(UsagePeriod::DurationDays { duration_days }),
            (None, Some(start), Some(end)) => Ok(UsagePeriod::DateRange { start, end }),
            (Some(_), _, _) => Err(
                "period must be either duration_days or start_date/end_date, not both".to_string(),
            ),
            (None, _, _) => Err(
                "period requires duration_days, or both start_date and end_date".to_string(),
            ),
        }
    }
}
