//! Rental Pricing Engine
//!
//! This crate provides functionality for pricing asset rentals with tiered
//! daily/weekly/monthly rates, decomposing a usage duration into the
//! cheapest combination of whole months, whole weeks, and remaining days.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
