//! Search and category filtering over the catalog
use crate::catalog::{Category, Item, UnknownCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category selector: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Value used for `<option>` elements.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(category) => category.id(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_KEY) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Search text plus category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl CatalogFilter {
    #[must_use]
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        matches_search(&item.name, &self.search.to_lowercase())
            && self.category.matches(item.category)
    }

    /// Items passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        filter_items(items, &self.search, self.category)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }
}

fn matches_search(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

/// Items whose name contains `search` (case-insensitive) and whose category
/// passes `category`. Source order is preserved.
#[must_use]
pub fn filter_items<'a>(
    items: &'a [Item],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(&item.name, &needle) && category.matches(item.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let visible = CatalogFilter::default().apply(catalog.items());
        assert_eq!(visible.len(), 6);
        assert_eq!(visible[0].name, "Алмазный меч");
        assert_eq!(visible[5].name, "Элитры");
    }

    #[test]
    fn search_ignores_case() {
        let catalog = Catalog::builtin().unwrap();
        let visible = filter_items(catalog.items(), "ЗЕЛЬЕ", CategoryFilter::All);
        assert_eq!(names(&visible), vec!["Зелье силы"]);
    }

    #[test]
    fn search_and_category_combine() {
        let catalog = Catalog::builtin().unwrap();
        let visible = filter_items(
            catalog.items(),
            "алмазн",
            CategoryFilter::Only(Category::Tools),
        );
        assert_eq!(names(&visible), vec!["Алмазная кирка"]);
    }

    #[test]
    fn category_filter_parses_wildcard_and_labels() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Магия".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Magic)
        );
        assert_eq!(CategoryFilter::Only(Category::Armor).key(), "armor");
        assert!("nothing".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn active_flag_tracks_inputs() {
        assert!(!CatalogFilter::default().is_active());
        assert!(CatalogFilter::new("a", CategoryFilter::All).is_active());
        assert!(CatalogFilter::new("", CategoryFilter::Only(Category::Food)).is_active());
    }
}
