//! Error types for the Rental Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rental pricing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Rental Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rental_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Asset id was not found in the catalog.
    #[error("Asset not found: {id}")]
    AssetNotFound {
        /// The asset id that was not found.
        id: String,
    },

    /// The end date of a usage period precedes its start date.
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidRange {
        /// The start date of the range.
        start: NaiveDate,
        /// The end date of the range.
        end: NaiveDate,
    },

    /// A usage duration was not a positive number of days.
    #[error("Invalid duration: {days} days (must be at least 1)")]
    InvalidDuration {
        /// The rejected day count.
        days: u32,
    },

    /// A supplied rate was negative.
    #[error("Invalid {tier} rate: {rate} (rates must be non-negative)")]
    InvalidRate {
        /// The rate tier the negative value was supplied for.
        tier: String,
        /// The rejected rate.
        rate: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
