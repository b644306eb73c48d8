use crate::i18n::{locales, t, tr};
use crate::shop::Tab;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Id of the navbar "add" button; focus returns here when the dialog closes.
pub const ADD_BUTTON_ID: &str = "nav-add-btn";
pub const CART_BUTTON_ID: &str = "nav-cart-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active_tab: Tab,
    /// Distinct entries in the cart
    pub cart_count: usize,
    pub on_select_tab: Callback<Tab>,
    pub on_open_add: Callback<AttrValue>,
    pub on_open_cart: Callback<()>,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    #[prop_or_default]
    pub high_contrast: bool,
    #[prop_or_default]
    pub on_toggle_hc: Callback<bool>,
}

fn tab_label(tab: Tab) -> String {
    t(&format!("nav.{}", tab.id()))
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let open_add = {
        let cb = p.on_open_add.clone();
        Callback::from(move |_| cb.emit(AttrValue::from(ADD_BUTTON_ID)))
    };
    let open_cart = {
        let cb = p.on_open_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_hc = {
        let cb = p.on_toggle_hc.clone();
        let next = !p.high_contrast;
        Callback::from(move |_| cb.emit(next))
    };

    let count_str = p.cart_count.to_string();
    let badge_label = tr(
        "nav.cart_badge",
        Some(&BTreeMap::from([("count", count_str.as_str())])),
    );

    html! {
        <header role="banner" class="shop-nav">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="brand">
                    <span class="brand-icon" aria-hidden="true">{"⛏️"}</span>
                    <span class="brand-name">{ t("nav.brand") }</span>
                </div>
                <nav class="header-right" aria-label={t("nav.main")}>
                    { for Tab::ALL.into_iter().map(|tab| {
                        let active = tab == p.active_tab;
                        let cb = p.on_select_tab.clone();
                        html! {
                            <button
                                type="button"
                                class={classes!("nav-tab", active.then_some("active"))}
                                aria-pressed={active.to_string()}
                                data-tab={tab.id()}
                                onclick={Callback::from(move |_| cb.emit(tab))}>
                                { tab_label(tab) }
                            </button>
                        }
                    }) }
                    <button id={ADD_BUTTON_ID} type="button" class="nav-tab" onclick={open_add}>
                        { t("nav.add") }
                    </button>
                    <button
                        id={CART_BUTTON_ID}
                        type="button"
                        class="nav-cart"
                        aria-label={t("nav.cart")}
                        onclick={open_cart}>
                        <span aria-hidden="true">{"🛒"}</span>
                        { if p.cart_count > 0 {
                            html! { <span class="cart-badge" title={badge_label}>{ p.cart_count }</span> }
                        } else {
                            html! {}
                        }}
                    </button>
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                    <button
                        type="button"
                        class="nav-hc"
                        aria-pressed={p.high_contrast.to_string()}
                        onclick={toggle_hc}>
                        { t("nav.high_contrast") }
                    </button>
                </nav>
            </div>
        </header>
    }
}
