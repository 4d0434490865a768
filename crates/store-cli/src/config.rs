//! # Application Configuration
//!
//! Settings for the terminal storefront and catalog loading.

use std::path::{Path, PathBuf};
use store_core::{Catalog, Product, Store, StoreResult};

/// Catalog locations tried when `CATALOG_PATH` is not set
const CATALOG_SEARCH_PATHS: [&str; 3] = [
    "config/catalog.toml",
    "../config/catalog.toml",
    "../../config/catalog.toml",
];

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Name shown in the menu banner
    pub store_name: String,
    /// Explicit catalog file, if any
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "Best Buy".to_string()),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
        }
    }

    /// Build the store from the configured catalog.
    ///
    /// An explicit `CATALOG_PATH` must load. Otherwise the search paths are
    /// tried in turn, falling back to the built-in demo store.
    pub fn load_store(&self) -> anyhow::Result<Store> {
        if let Some(path) = &self.catalog_path {
            let store = load_catalog(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
            return Ok(store);
        }

        for path in CATALOG_SEARCH_PATHS {
            let path = Path::new(path);
            if path.exists() {
                let store = load_catalog(path)
                    .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
                return Ok(store);
            }
        }

        tracing::warn!("No catalog found, using built-in demo store");
        Ok(demo_store()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: "Best Buy".to_string(),
            catalog_path: None,
        }
    }
}

fn load_catalog(path: &Path) -> StoreResult<Store> {
    let store = Catalog::load(path)?.into_store()?;
    tracing::info!("Loaded {} products from {}", store.len(), path.display());
    Ok(store)
}

/// The three-product store used when no catalog is configured
pub fn demo_store() -> StoreResult<Store> {
    Ok(Store::new(vec![
        Product::new("MacBook Air M2", 1450.0, 100)?,
        Product::new("Bose QuietComfort Earbuds", 250.0, 500)?,
        Product::new("Google Pixel 7", 500.0, 250)?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store() {
        let store = demo_store().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.total_stock(), 850);
    }

    #[test]
    fn test_explicit_catalog_must_exist() {
        let config = AppConfig {
            store_name: "Test".to_string(),
            catalog_path: Some(PathBuf::from("no/such/catalog.toml")),
        };
        assert!(config.load_store().is_err());
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/catalog.toml");
        let config = AppConfig {
            store_name: "Best Buy".to_string(),
            catalog_path: Some(path),
        };
        let store = config.load_store().unwrap();
        assert!(!store.is_empty());
        assert!(store.items().iter().any(|p| p.promotion().is_some()));
    }
}
