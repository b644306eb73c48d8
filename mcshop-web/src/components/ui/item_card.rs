use super::rarity_badge::RarityBadge;
use crate::i18n::t;
use crate::shop::{Item, ItemId, fmt_price};
use yew::prelude::*;

/// What the card's badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeMode {
    /// Rarity name, used on the home tab
    #[default]
    Rarity,
    /// Category name coloured by rarity, used in the catalog grid
    Category,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub on_add: Callback<ItemId>,
    #[prop_or_default]
    pub badge: BadgeMode,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(ItemCard)]
pub fn item_card(p: &Props) -> Html {
    let item = &p.item;
    let on_add = {
        let cb = p.on_add.clone();
        let id = item.id;
        Callback::from(move |_| cb.emit(id))
    };
    let badge_label = match p.badge {
        BadgeMode::Rarity => None,
        BadgeMode::Category => Some(AttrValue::from(t(&format!(
            "categories.{}",
            item.category.id()
        )))),
    };
    let title_id = format!("item-{}-title", item.id);

    html! {
        <article
            class={classes!("item-card", p.compact.then_some("compact"))}
            aria-labelledby={title_id.clone()}
            data-item-id={item.id.to_string()}>
            <img class="item-card__image" src={item.image.clone()} alt={item.name.clone()} loading="lazy" />
            <div class="item-card__body">
                <h3 id={title_id} class="item-card__title">{ item.name.clone() }</h3>
                <p class="item-card__description muted">{ item.description.clone() }</p>
                <div class="item-card__meta">
                    <RarityBadge rarity={item.rarity} label={badge_label} />
                    <span class="item-card__price">{ fmt_price(u64::from(item.price)) }</span>
                </div>
            </div>
            <footer class="item-card__footer">
                <button type="button" class="retro-btn-primary add-to-cart" onclick={on_add}>
                    <span aria-hidden="true">{"🛒 "}</span>
                    { t("item.add_to_cart") }
                </button>
            </footer>
        </article>
    }
}
