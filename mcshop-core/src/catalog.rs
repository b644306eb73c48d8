//! Item model and the static catalog
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Embedded catalog shipped with the shop.
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Unique identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grouping tag used by the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Weapons,
    Tools,
    Armor,
    Food,
    Potions,
    Magic,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Weapons,
        Self::Tools,
        Self::Armor,
        Self::Food,
        Self::Potions,
        Self::Magic,
    ];

    /// Stable identifier used in data files and translation keys.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Tools => "tools",
            Self::Armor => "armor",
            Self::Food => "food",
            Self::Potions => "potions",
            Self::Magic => "magic",
        }
    }

    /// Label in the catalog's native language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Weapons => "Оружие",
            Self::Tools => "Инструменты",
            Self::Armor => "Броня",
            Self::Food => "Еда",
            Self::Potions => "Зелья",
            Self::Magic => "Магия",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts either the identifier (`food`) or the native label (`Еда`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|cat| {
                cat.id().eq_ignore_ascii_case(trimmed)
                    || cat.native_name().to_lowercase() == trimmed.to_lowercase()
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Display tier of an item. Affects badge styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

/// A purchasable in-game object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Price in whole currency units
    pub price: u32,
    pub image: String,
    pub category: Category,
    pub rarity: Rarity,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("catalog contains no items")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<Item>,
}

/// Immutable, ordered list of catalog items.
///
/// Items keep the order they were declared in; nothing mutates the catalog
/// once it is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from items, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an id, or
    /// [`CatalogError::Empty`] when no items are given.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the items violate
    /// [`Catalog::new`]'s checks.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items)
    }

    /// The catalog embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to parse.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// A catalog with no items, used as the view fallback when loading fails.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first `count` items, in catalog order.
    #[must_use]
    pub fn leading(&self, count: usize) -> &[Item] {
        &self.items[..count.min(self.items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> Item {
        Item {
            id: ItemId(id),
            name: format!("item-{id}"),
            description: String::new(),
            price: 10,
            image: String::new(),
            category: Category::Tools,
            rarity: Rarity::Common,
        }
    }

    #[test]
    fn builtin_catalog_has_six_items_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.find(ItemId(6)).unwrap().name, "Элитры");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![item(1), item(2), item(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ItemId(1))));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = Catalog::from_json("{\"items\": [{}]}").unwrap_err();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn category_parses_ids_and_native_labels() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Еда".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("броня".parse::<Category>().unwrap(), Category::Armor);
        assert!("Шапки".parse::<Category>().is_err());
    }

    #[test]
    fn leading_clamps_to_catalog_length() {
        let catalog = Catalog::new(vec![item(1), item(2)]).unwrap();
        assert_eq!(catalog.leading(3).len(), 2);
        assert_eq!(catalog.leading(1)[0].id, ItemId(1));
    }
}
