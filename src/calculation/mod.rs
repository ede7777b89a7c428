//! Calculation logic for the Rental Pricing Engine.
//!
//! This module contains the pricing functions: date-range normalization,
//! tier activation rules, and the greedy month/week/day cost decomposition.

mod decompose;
mod duration;
mod tier_rules;

pub use decompose::decompose;
pub use duration::duration_days;
pub use tier_rules::{DAYS_PER_MONTH, DAYS_PER_WEEK, monthly_tier_active, weekly_tier_active};
