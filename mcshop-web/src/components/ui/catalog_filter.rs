use crate::i18n::t;
use crate::shop::{CatalogFilter, Category, CategoryFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filter: CatalogFilter,
    /// Selector order after the "all" entry
    pub categories: Vec<Category>,
    pub on_search: Callback<String>,
    pub on_category: Callback<CategoryFilter>,
}

/// Selector entries: the wildcard first, then each category.
#[must_use]
pub fn category_options(categories: &[Category]) -> Vec<(CategoryFilter, String)> {
    std::iter::once((CategoryFilter::All, t("catalog.all_categories")))
        .chain(categories.iter().map(|category| {
            (
                CategoryFilter::Only(*category),
                t(&format!("categories.{}", category.id())),
            )
        }))
        .collect()
}

#[function_component(CatalogFilterBar)]
pub fn catalog_filter_bar(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_change = {
        let cb = p.on_category.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            match select.value().parse::<CategoryFilter>() {
                Ok(selected) => cb.emit(selected),
                Err(err) => log::warn!("ignoring category selection: {err}"),
            }
        })
    };

    html! {
        <div class="catalog-filter">
            <div class="field">
                <label for="catalog-search">{ t("catalog.search_label") }</label>
                <input
                    id="catalog-search"
                    type="search"
                    placeholder={t("catalog.search_placeholder")}
                    value={p.filter.search.clone()}
                    oninput={on_input} />
            </div>
            <div class="field">
                <label for="catalog-category">{ t("catalog.category_label") }</label>
                <select id="catalog-category" onchange={on_change}>
                    { for category_options(&p.categories).into_iter().map(|(option, label)| html! {
                        <option value={option.key()} selected={option == p.filter.category}>{ label }</option>
                    }) }
                </select>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_wildcard() {
        crate::i18n::set_lang("ru");
        let options = category_options(&[Category::Weapons, Category::Food]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], (CategoryFilter::All, "Все категории".to_string()));
        assert_eq!(
            options[2],
            (CategoryFilter::Only(Category::Food), "Еда".to_string())
        );
    }
}
