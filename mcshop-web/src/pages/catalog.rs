use crate::components::ui::catalog_filter::CatalogFilterBar;
use crate::components::ui::item_card::{BadgeMode, ItemCard};
use crate::i18n::{t, tr};
use crate::shop::{CatalogFilter, Category, CategoryFilter, Item, ItemId};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CatalogPageProps {
    /// Items already narrowed by `filter`
    pub items: Vec<Item>,
    pub filter: CatalogFilter,
    pub categories: Vec<Category>,
    pub on_add: Callback<ItemId>,
    pub on_search: Callback<String>,
    pub on_category: Callback<CategoryFilter>,
}

#[function_component(CatalogPage)]
pub fn catalog_page(props: &CatalogPageProps) -> Html {
    let count = props.items.len().to_string();
    let results = tr(
        "catalog.results",
        Some(&BTreeMap::from([("count", count.as_str())])),
    );

    let grid = if props.items.is_empty() {
        html! {
            <p class="catalog-empty" role="status">{ t("catalog.empty") }</p>
        }
    } else {
        html! {
            <div class="item-grid">
                { for props.items.iter().map(|item| html! {
                    <ItemCard
                        key={item.id.to_string()}
                        item={item.clone()}
                        on_add={props.on_add.clone()}
                        badge={BadgeMode::Category}
                        compact=true />
                }) }
            </div>
        }
    };

    html! {
        <section class="catalog" aria-labelledby="catalog-title" data-testid="catalog-tab">
            <h1 id="catalog-title">{ t("catalog.title") }</h1>
            <CatalogFilterBar
                filter={props.filter.clone()}
                categories={props.categories.clone()}
                on_search={props.on_search.clone()}
                on_category={props.on_category.clone()} />
            <p class="catalog-results muted" aria-live="polite">{ results }</p>
            { grid }
        </section>
    }
}
