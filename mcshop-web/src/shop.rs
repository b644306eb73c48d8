//! Web-side data loading
//!
//! Provides the browser implementation of the `mcshop-core` loader trait and
//! re-exports the core shop types.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

pub use mcshop_core::*;

/// Loader backed by the data embedded in `mcshop-core`.
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(catalog::CATALOG_JSON)?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            "shop" => config::SHOP_CONFIG_JSON,
            other => return Err(WebDataError::UnknownConfig(other.to_string())),
        };
        Ok(serde_json::from_str(json)?)
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    ShopEngine::new(WebDataLoader)
        .catalog()
        .unwrap_or_else(|err| {
            log::error!("Failed to load catalog: {err}");
            Catalog::empty()
        })
});

static SHOP_CONFIG: Lazy<ShopConfig> = Lazy::new(|| {
    ShopEngine::new(WebDataLoader)
        .config()
        .unwrap_or_else(|err| {
            log::error!("Failed to load shop config: {err}");
            ShopConfig::default()
        })
});

/// The catalog for this page load. Empty if the embedded data is invalid.
#[must_use]
pub fn shop_catalog() -> &'static Catalog {
    &CATALOG
}

#[must_use]
pub fn shop_config() -> &'static ShopConfig {
    &SHOP_CONFIG
}

/// Format an amount with the configured currency glyph.
#[must_use]
pub fn fmt_price(amount: u64) -> String {
    shop_config().format_price(amount)
}
