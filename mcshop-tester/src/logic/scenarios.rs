//! Scripted shop scenarios run by the logic tester.
use anyhow::{Context, Result, ensure};
use mcshop_core::{Catalog, Category, CategoryFilter, ItemId, ShopState, Tab, filter_items};

/// A named check against a fresh shop session.
pub struct TestScenario {
    pub key: &'static str,
    pub description: &'static str,
    pub test_fn: fn(&Catalog) -> Result<()>,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "smoke",
        description: "Catalog loads and a fresh session starts empty on the home tab",
        test_fn: smoke,
    },
    TestScenario {
        key: "cart-upsert",
        description: "Adding the same item twice keeps one entry with quantity 2",
        test_fn: cart_upsert,
    },
    TestScenario {
        key: "quantity-removal",
        description: "Quantity at or below zero removes the entry; unknown ids are ignored",
        test_fn: quantity_removal,
    },
    TestScenario {
        key: "cart-total",
        description: "Total is the sum of price times quantity",
        test_fn: cart_total,
    },
    TestScenario {
        key: "search-filter",
        description: "Search is a case-insensitive substring match on names",
        test_fn: search_filter,
    },
    TestScenario {
        key: "category-filter",
        description: "Category selector narrows to exact matches",
        test_fn: category_filter,
    },
    TestScenario {
        key: "filter-no-match",
        description: "A search nothing matches yields an empty list",
        test_fn: filter_no_match,
    },
    TestScenario {
        key: "tab-toggle",
        description: "Switching tabs leaves cart and filter untouched",
        test_fn: tab_toggle,
    },
];

pub fn get_scenario(name: &str) -> Option<&'static TestScenario> {
    let wanted = name.to_lowercase();
    SCENARIOS.iter().find(|scenario| scenario.key == wanted)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
}

fn add(state: &mut ShopState, catalog: &Catalog, id: u32) -> Result<()> {
    ensure!(
        state.add_by_id(catalog, ItemId(id)),
        "item {id} missing from catalog"
    );
    Ok(())
}

fn names(catalog: &Catalog, search: &str, category: CategoryFilter) -> Vec<String> {
    filter_items(catalog.items(), search, category)
        .into_iter()
        .map(|item| item.name.clone())
        .collect()
}

fn smoke(catalog: &Catalog) -> Result<()> {
    ensure!(catalog.len() == 6, "expected 6 items, found {}", catalog.len());
    let state = ShopState::new();
    ensure!(state.cart.is_empty(), "new session has cart entries");
    ensure!(state.tab == Tab::Home, "new session opened on {}", state.tab);
    ensure!(state.total_price() == 0, "empty cart total is not 0");
    Ok(())
}

fn cart_upsert(catalog: &Catalog) -> Result<()> {
    let mut state = ShopState::new();
    add(&mut state, catalog, 1)?;
    add(&mut state, catalog, 1)?;
    ensure!(state.cart.len() == 1, "expected 1 entry, found {}", state.cart.len());
    let qty = state.cart.quantity(ItemId(1));
    ensure!(qty == 2, "expected quantity 2, found {qty}");
    Ok(())
}

fn quantity_removal(catalog: &Catalog) -> Result<()> {
    let mut state = ShopState::new();
    add(&mut state, catalog, 3)?;
    state.cart.update_quantity(ItemId(3), 0);
    ensure!(!state.cart.contains(ItemId(3)), "quantity 0 kept the entry");

    add(&mut state, catalog, 3)?;
    state.cart.update_quantity(ItemId(3), -2);
    ensure!(state.cart.is_empty(), "negative quantity kept the entry");

    state.cart.update_quantity(ItemId(5), 4);
    ensure!(
        !state.cart.contains(ItemId(5)),
        "updating an absent id inserted it"
    );
    Ok(())
}

fn cart_total(catalog: &Catalog) -> Result<()> {
    let mut state = ShopState::new();
    add(&mut state, catalog, 1)?;
    add(&mut state, catalog, 1)?;
    add(&mut state, catalog, 2)?;
    let total = state.total_price();
    ensure!(total == 3500, "expected total 3500, found {total}");

    state.cart.remove_from_cart(ItemId(1));
    let total = state.total_price();
    ensure!(total == 500, "expected total 500 after removal, found {total}");
    Ok(())
}

fn search_filter(catalog: &Catalog) -> Result<()> {
    let partial = names(catalog, "Алмазн", CategoryFilter::All);
    ensure!(
        partial == ["Алмазный меч", "Алмазная кирка"],
        "\"Алмазн\" matched {partial:?}"
    );
    let exact = names(catalog, "Алмазный", CategoryFilter::All);
    ensure!(exact == ["Алмазный меч"], "\"Алмазный\" matched {exact:?}");
    let shouted = names(catalog, "ЗЕЛЬЕ", CategoryFilter::All);
    ensure!(shouted == ["Зелье силы"], "\"ЗЕЛЬЕ\" matched {shouted:?}");
    Ok(())
}

fn category_filter(catalog: &Catalog) -> Result<()> {
    let food = "Еда"
        .parse::<Category>()
        .context("parsing the food category label")?;
    let only_food = names(catalog, "", CategoryFilter::Only(food));
    ensure!(only_food == ["Золотое яблоко"], "food matched {only_food:?}");
    let all = names(catalog, "", CategoryFilter::All);
    ensure!(all.len() == catalog.len(), "wildcard dropped items");
    Ok(())
}

fn filter_no_match(catalog: &Catalog) -> Result<()> {
    let none = names(catalog, "несуществующий предмет", CategoryFilter::All);
    ensure!(none.is_empty(), "expected no matches, found {none:?}");
    let mismatched = names(catalog, "меч", CategoryFilter::Only(Category::Food));
    ensure!(mismatched.is_empty(), "search and category should combine");
    Ok(())
}

fn tab_toggle(catalog: &Catalog) -> Result<()> {
    let mut state = ShopState::new();
    add(&mut state, catalog, 6)?;
    state.set_search("эл");
    let before = (state.cart.clone(), state.filter.clone());
    for tab in [Tab::Catalog, Tab::Home, Tab::Catalog] {
        state.select_tab(tab);
        ensure!(state.tab == tab, "tab did not switch to {tab}");
    }
    ensure!(
        (state.cart.clone(), state.filter.clone()) == before,
        "tab switch changed cart or filter"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_scenario_passes() {
        let catalog = Catalog::builtin().unwrap();
        for scenario in SCENARIOS {
            (scenario.test_fn)(&catalog)
                .unwrap_or_else(|err| panic!("{} failed: {err:#}", scenario.key));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_scenario("Cart-Total").map(|s| s.key), Some("cart-total"));
        assert!(get_scenario("checkout").is_none());
        assert_eq!(list_scenarios().count(), SCENARIOS.len());
    }

    #[test]
    fn scenarios_fail_on_a_foreign_catalog() {
        let catalog = Catalog::new(vec![mcshop_core::Item {
            id: ItemId(1),
            name: "Камень".to_string(),
            description: String::new(),
            price: 1,
            image: String::new(),
            category: Category::Tools,
            rarity: mcshop_core::Rarity::Common,
        }])
        .unwrap();
        assert!(smoke(&catalog).is_err());
        assert!(cart_total(&catalog).is_err());
    }
}
