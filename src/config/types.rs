//! Catalog configuration types.
//!
//! This module defines the deserialization targets for the catalog YAML
//! files and the assembled in-memory [`Catalog`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RatePlan;

/// Catalog metadata from `catalog.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Human-readable catalog name.
    pub name: String,
    /// ISO 4217 currency code all rates are denominated in.
    pub currency: String,
    /// Catalog version string.
    pub version: String,
}

/// The rate tiers configured for one asset in `assets.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetRates {
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

/// A rentable asset from `assets.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Display name of the asset.
    pub name: String,
    /// Category the asset belongs to (e.g., "vehicle", "heavy_machine").
    pub category: String,
    /// The configured rate tiers.
    #[serde(default)]
    pub rates: AssetRates,
}

impl Asset {
    /// Builds the [`RatePlan`] for pricing this asset.
    pub fn rate_plan(&self) -> RatePlan {
        RatePlan {
            daily_rate: self.rates.daily,
            weekly_rate: self.rates.weekly,
            monthly_rate: self.rates.monthly,
        }
    }
}

/// The assembled catalog configuration.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog metadata.
    pub metadata: CatalogMetadata,
    /// Assets keyed by asset id.
    pub assets: HashMap<String, Asset>,
}
