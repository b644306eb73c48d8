//! MC Shop core
//!
//! Platform-agnostic catalog, cart and filter logic for the MC Shop item
//! marketplace. This crate has no UI or browser dependencies.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod filter;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use cart::{Cart, CartEntry};
pub use catalog::{Catalog, CatalogError, Category, Item, ItemId, Rarity, UnknownCategory};
pub use config::ShopConfig;
pub use draft::{DraftError, DraftField, ItemDraft, ValidatedDraft};
pub use filter::{CatalogFilter, CategoryFilter, filter_items};
pub use state::ShopState;
pub use view::{Tab, UnknownTab};

/// Trait for abstracting catalog and configuration loading.
/// Platform-specific implementations should provide this.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the item catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is invalid.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load configuration data for a named subsystem
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Loaded catalog plus shop settings, ready to back a view.
pub struct ShopEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> ShopEngine<L>
where
    L: DataLoader,
{
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Load the catalog through the configured loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, L::Error> {
        self.data_loader.load_catalog()
    }

    /// Load the `shop` configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    pub fn config(&self) -> Result<ShopConfig, L::Error> {
        self.data_loader.load_config("shop")
    }

    /// Fresh view state: empty cart, no filter, home tab.
    #[must_use]
    pub fn new_session(&self) -> ShopState {
        ShopState::new()
    }
}
