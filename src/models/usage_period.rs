//! Usage period model.
//!
//! This module defines the [`UsagePeriod`] enum representing how long an
//! asset is rented for: either a plain day count or an inclusive date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::duration_days;
use crate::error::{EngineError, EngineResult};

/// How long an asset is rented for.
///
/// A period given as dates is inclusive of both endpoints, so a single-day
/// rental has `start == end` and normalizes to 1 day.
///
/// # Example
///
/// ```
/// use rental_pricing::models::UsagePeriod;
/// use chrono::NaiveDate;
///
/// let period = UsagePeriod::DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// };
/// assert_eq!(period.normalized_days().unwrap(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsagePeriod {
    /// A fixed number of rental days.
    DurationDays {
        /// The number of days, at least 1.
        duration_days: u32,
    },
    /// An inclusive calendar date range.
    DateRange {
        /// The first rental day.
        #[serde(rename = "start_date")]
        start: NaiveDate,
        /// The last rental day, inclusive.
        #[serde(rename = "end_date")]
        end: NaiveDate,
    },
}

impl UsagePeriod {
    /// Normalizes the period into a positive day count.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when the end date precedes the
    /// start date, or [`EngineError::InvalidDuration`] when the day count is
    /// zero.
    pub fn normalized_days(&self) -> EngineResult<u32> {
        let days = match *self {
            UsagePeriod::DurationDays { duration_days } => duration_days,
            UsagePeriod::DateRange { start, end } => duration_days(start, end)?,
        };
        if days < 1 {
            return Err(EngineError::InvalidDuration { days });
        }
        Ok(days)
    }
}
