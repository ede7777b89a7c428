//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the rental
//! asset catalog from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RatePlan;

use super::types::{Asset, Catalog, CatalogMetadata};

/// Loads and provides access to the rental asset catalog.
///
/// The `CatalogLoader` reads YAML configuration files from a directory and
/// provides lookups from asset id to asset record and rate plan.
///
/// # Directory Structure
///
/// The catalog directory should have the following structure:
/// ```text
/// config/catalog/
/// ├── catalog.yaml   # Catalog metadata (name, currency, version)
/// └── assets.yaml    # Asset id → name, category, rates
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_pricing::config::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./config/catalog").unwrap();
///
/// let asset = catalog.get_asset("dump_truck_4t").unwrap();
/// println!("Asset: {}", asset.name);
///
/// let plan = catalog.rate_plan("dump_truck_4t").unwrap();
/// println!("Daily rate: {:?}", plan.daily_rate);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// Rate plans are validated eagerly: a negative rate anywhere in
    /// `assets.yaml` fails the load rather than surfacing later in a quote.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a required file is
    /// missing, [`EngineError::ConfigParseError`] when a file contains
    /// invalid YAML, or [`EngineError::InvalidRate`] when an asset carries a
    /// negative rate.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata: CatalogMetadata = read_yaml(&path.join("catalog.yaml"))?;
        let assets: HashMap<String, Asset> = read_yaml(&path.join("assets.yaml"))?;

        for asset in assets.values() {
            asset.rate_plan().validate()?;
        }

        Ok(Self {
            catalog: Catalog { metadata, assets },
        })
    }

    /// Builds a loader from an already-assembled catalog. Used in tests.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.catalog.metadata
    }

    /// Looks up an asset by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AssetNotFound`] when the id is not in the
    /// catalog.
    pub fn get_asset(&self, id: &str) -> EngineResult<&Asset> {
        self.catalog
            .assets
            .get(id)
            .ok_or_else(|| EngineError::AssetNotFound { id: id.to_string() })
    }

    /// Returns the rate plan for an asset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AssetNotFound`] when the id is not in the
    /// catalog.
    pub fn rate_plan(&self, id: &str) -> EngineResult<RatePlan> {
        Ok(self.get_asset(id)?.rate_plan())
    }
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path.display().to_string(),
    })?;
    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
