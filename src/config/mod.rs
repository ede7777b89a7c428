//! Catalog configuration loading for the Rental Pricing Engine.
//!
//! This module provides functionality to load the rental asset catalog from
//! YAML files, including catalog metadata and per-asset rate plans.
//!
//! # Example
//!
//! ```no_run
//! use rental_pricing::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/catalog").unwrap();
//! println!("Loaded catalog: {}", catalog.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{Asset, AssetRates, Catalog, CatalogMetadata};
