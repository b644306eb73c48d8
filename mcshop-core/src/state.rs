//! Aggregate view state: cart, filter and active tab
use crate::cart::Cart;
use crate::catalog::{Catalog, Item, ItemId};
use crate::filter::{CatalogFilter, CategoryFilter};
use crate::view::Tab;
use serde::Serialize;

/// Everything the Catalog View mutates. The catalog itself lives outside and
/// is only borrowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShopState {
    pub cart: Cart,
    pub filter: CatalogFilter,
    pub tab: Tab,
}

impl ShopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs. Cart and filter are untouched.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Add one unit of the catalog item `id`. Returns `false` when the id is
    /// not in the catalog.
    pub fn add_by_id(&mut self, catalog: &Catalog, id: ItemId) -> bool {
        catalog.find(id).is_some_and(|item| {
            self.cart.add_to_cart(item);
            true
        })
    }

    #[must_use]
    pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        self.filter.apply(catalog.items())
    }

    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.cart.total_price()
    }
}
