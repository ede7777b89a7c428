//! Date range normalization.
//!
//! This module converts an inclusive start/end date pair into a positive
//! integer day count for the cost decomposition.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Converts an inclusive date range into a day count.
///
/// Both endpoints count, so a range where `start == end` is 1 day. Dates
/// carry no time-of-day component; callers holding timestamps truncate
/// before calling.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::duration_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(duration_days(start, end).unwrap(), 7);
/// ```
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidRange { start, end });
    }
    // end >= start, so num_days() is non-negative and + 1 fits u32 for any
    // representable NaiveDate pair.
    Ok((end - start).num_days() as u32 + 1)
}
