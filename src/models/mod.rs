//! Core data models for the Rental Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_breakdown;
mod rate_plan;
mod usage_period;

pub use cost_breakdown::CostBreakdown;
pub use rate_plan::RatePlan;
pub use usage_period::UsagePeriod;
