use crate::components::ui::item_card::{BadgeMode, ItemCard};
use crate::i18n::t;
use crate::shop::{Item, ItemId};
use yew::prelude::*;

/// Hero "sell" button; focus returns here when the add dialog closes.
pub const SELL_BUTTON_ID: &str = "hero-sell-btn";

const FEATURES: [(&str, &str); 3] = [("fast", "⚡"), ("safe", "🛡️"), ("unique", "💎")];

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    /// Leading catalog items shown under "popular"
    pub popular: Vec<Item>,
    pub on_add: Callback<ItemId>,
    pub on_view_catalog: Callback<()>,
    pub on_sell: Callback<AttrValue>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let view_catalog = {
        let cb = props.on_view_catalog.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sell = {
        let cb = props.on_sell.clone();
        Callback::from(move |_| cb.emit(AttrValue::from(SELL_BUTTON_ID)))
    };

    html! {
        <div class="home" data-testid="home-tab">
            <section class="hero" aria-labelledby="hero-title">
                <h1 id="hero-title" class="hero__title">{ t("home.title") }</h1>
                <p class="hero__tagline">{ t("home.tagline") }</p>
                <div class="hero__actions">
                    <button type="button" class="retro-btn-primary" onclick={view_catalog}>
                        { t("home.view_catalog") }
                    </button>
                    <button id={SELL_BUTTON_ID} type="button" class="retro-btn-secondary" onclick={sell}>
                        { t("home.sell") }
                    </button>
                </div>
            </section>

            <section class="popular" aria-labelledby="popular-title">
                <h2 id="popular-title">{ t("home.popular") }</h2>
                <div class="item-grid">
                    { for props.popular.iter().map(|item| html! {
                        <ItemCard
                            key={item.id.to_string()}
                            item={item.clone()}
                            on_add={props.on_add.clone()}
                            badge={BadgeMode::Rarity} />
                    }) }
                </div>
            </section>

            <section class="features" aria-label={t("home.features.title")}>
                { for FEATURES.iter().map(|(key, icon)| html! {
                    <div class="feature">
                        <span class="feature__icon" aria-hidden="true">{ *icon }</span>
                        <h3>{ t(&format!("home.features.{key}.title")) }</h3>
                        <p class="muted">{ t(&format!("home.features.{key}.text")) }</p>
                    </div>
                }) }
            </section>
        </div>
    }
}
