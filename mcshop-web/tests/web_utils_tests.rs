#[cfg(target_arch = "wasm32")]
use mcshop_web::dom;
use mcshop_web::i18n;
use mcshop_web::router::Route;
use mcshop_web::shop::{DataLoader, ShopConfig, WebDataLoader, fmt_price};
use serde_json::Value;
use std::collections::BTreeMap;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("nav.catalog"), "Catalog");

    let vars = BTreeMap::from([("item", "Elytra"), ("qty", "2")]);
    assert_eq!(i18n::tr("status.added", Some(&vars)), "Elytra: 2 in cart");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("ru");
    assert_eq!(i18n::t("catalog.empty"), "Предметы не найдены");
}

#[test]
fn i18n_plural_forms_pick_by_count() {
    i18n::set_lang("ru");
    let one = BTreeMap::from([("count", "1")]);
    let many = BTreeMap::from([("count", "5")]);
    assert_eq!(i18n::tr("nav.cart_badge", Some(&one)), "1 товар в корзине");
    assert_eq!(i18n::tr("nav.cart_badge", Some(&many)), "5 товаров в корзине");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "ru"));
    assert!(metas.iter().any(|m| m.code == "en"));
}

#[test]
fn web_loader_serves_catalog_and_config() {
    let catalog = WebDataLoader.load_catalog().expect("catalog loads");
    assert_eq!(catalog.len(), 6);

    let config: ShopConfig = WebDataLoader.load_config("shop").expect("config loads");
    assert_eq!(config.popular_count, 3);
    assert_eq!(fmt_price(300), "300 💰");

    let err = WebDataLoader
        .load_config::<Value>("missing")
        .expect_err("unknown config");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn routes_map_to_paths() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::Catalog.to_path(), "/catalog");
    assert_eq!(Route::recognize("/catalog"), Some(Route::Catalog));
}
