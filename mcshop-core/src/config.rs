//! Shop presentation settings
use crate::catalog::{Catalog, Category, Item};
use serde::{Deserialize, Serialize};

/// Embedded default configuration.
pub const SHOP_CONFIG_JSON: &str = include_str!("../data/shop.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// How many leading catalog items the home tab shows as popular
    #[serde(default = "default_popular_count")]
    pub popular_count: usize,
    /// Glyph appended to prices
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Order of the category selector after the "all" entry
    #[serde(default = "default_category_order")]
    pub category_order: Vec<Category>,
}

const fn default_popular_count() -> usize {
    3
}

fn default_currency() -> String {
    String::from("💰")
}

fn default_locale() -> String {
    String::from("ru")
}

fn default_category_order() -> Vec<Category> {
    Category::ALL.to_vec()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            popular_count: default_popular_count(),
            currency: default_currency(),
            default_locale: default_locale(),
            category_order: default_category_order(),
        }
    }
}

impl ShopConfig {
    /// Parse the embedded configuration, falling back to defaults.
    #[must_use]
    pub fn default_config() -> Self {
        serde_json::from_str(SHOP_CONFIG_JSON).unwrap_or_else(|err| {
            log::warn!("shop config unreadable, using defaults: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn popular<'a>(&self, catalog: &'a Catalog) -> &'a [Item] {
        catalog.leading(self.popular_count)
    }

    /// Format a price with the configured currency glyph.
    #[must_use]
    pub fn format_price(&self, amount: u64) -> String {
        format!("{amount} {}", self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(ShopConfig::default_config(), ShopConfig::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: ShopConfig = serde_json::from_str(r#"{"popular_count": 1}"#).unwrap();
        assert_eq!(cfg.popular_count, 1);
        assert_eq!(cfg.currency, "💰");
        assert_eq!(cfg.category_order.len(), 6);
    }

    #[test]
    fn popular_takes_leading_items() {
        let catalog = Catalog::builtin().unwrap();
        let cfg = ShopConfig::default();
        let names: Vec<&str> = cfg.popular(&catalog).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Алмазный меч", "Золотое яблоко", "Зачарованная книга"]);
        assert_eq!(cfg.format_price(3500), "3500 💰");
    }
}
