use futures::executor::block_on;
use mcshop_web::app::{Shell, ShellProps};
use mcshop_web::pages::{
    catalog::{CatalogPage, CatalogPageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use mcshop_web::router::Route;
use mcshop_web::shop::{Catalog, CatalogFilter, Category, CategoryFilter, shop_config};
use yew::{Callback, LocalServerRenderer};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

fn catalog_props(filter: CatalogFilter) -> CatalogPageProps {
    let catalog = catalog();
    CatalogPageProps {
        items: filter.apply(catalog.items()).into_iter().cloned().collect(),
        filter,
        categories: Category::ALL.to_vec(),
        on_add: Callback::noop(),
        on_search: Callback::noop(),
        on_category: Callback::noop(),
    }
}

#[test]
fn home_page_shows_three_popular_items() {
    mcshop_web::i18n::set_lang("ru");
    let catalog = catalog();
    let props = HomePageProps {
        popular: shop_config().popular(&catalog).to_vec(),
        on_add: Callback::noop(),
        on_view_catalog: Callback::noop(),
        on_sell: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert_eq!(html.matches("data-item-id=").count(), 3);
    assert!(html.contains("Алмазный меч"));
    assert!(html.contains("Зачарованная книга"));
    assert!(!html.contains("Элитры"));
    assert!(html.contains("Быстрая доставка"));
}

#[test]
fn catalog_page_renders_every_item_unfiltered() {
    mcshop_web::i18n::set_lang("ru");
    let html = block_on(
        LocalServerRenderer::<CatalogPage>::with_props(catalog_props(CatalogFilter::default()))
            .render(),
    );
    assert_eq!(html.matches("data-item-id=").count(), 6);
    assert!(html.contains("Все категории"));
}

#[test]
fn catalog_page_shows_empty_state() {
    mcshop_web::i18n::set_lang("ru");
    let filter = CatalogFilter::new("несуществующий", CategoryFilter::All);
    let html = block_on(LocalServerRenderer::<CatalogPage>::with_props(catalog_props(filter)).render());
    assert!(html.contains("Предметы не найдены"));
    assert!(!html.contains("data-item-id="));
}

#[test]
fn catalog_page_respects_category() {
    mcshop_web::i18n::set_lang("ru");
    let filter = CatalogFilter::new("", CategoryFilter::Only(Category::Food));
    let html = block_on(LocalServerRenderer::<CatalogPage>::with_props(catalog_props(filter)).render());
    assert!(html.contains("Золотое яблоко"));
    assert!(!html.contains("Алмазный меч"));
}

#[test]
fn not_found_page_offers_way_home() {
    mcshop_web::i18n::set_lang("ru");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Страница не найдена"));
    assert!(html.contains("На главную"));
}

#[test]
fn shell_opens_on_home_tab() {
    mcshop_web::i18n::set_lang("ru");
    let html = block_on(LocalServerRenderer::<Shell>::with_props(ShellProps::default()).render());
    assert!(html.contains("data-testid=\"home-tab\""));
    assert!(html.contains("shop-status"));
    assert!(!html.contains("cart-badge"));
}

#[test]
fn shell_follows_catalog_route() {
    mcshop_web::i18n::set_lang("ru");
    let props = ShellProps {
        route: Some(Route::Catalog),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Shell>::with_props(props).render());
    assert!(html.contains("data-testid=\"catalog-tab\""));
    assert!(!html.contains("data-testid=\"home-tab\""));
}

#[test]
fn shell_shows_not_found_for_unknown_route() {
    mcshop_web::i18n::set_lang("ru");
    let props = ShellProps {
        route: Some(Route::NotFound),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Shell>::with_props(props).render());
    assert!(html.contains("not-found"));
}
