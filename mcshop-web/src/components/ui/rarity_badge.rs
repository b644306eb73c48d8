use crate::i18n::t;
use crate::shop::Rarity;
use yew::prelude::*;

/// Badge colour class for a rarity tier.
#[must_use]
pub const fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Legendary => "badge badge-legendary",
        Rarity::Epic => "badge badge-epic",
        Rarity::Rare => "badge badge-rare",
        Rarity::Common => "badge badge-common",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rarity: Rarity,
    /// Text to show instead of the rarity name
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(RarityBadge)]
pub fn rarity_badge(p: &Props) -> Html {
    let text = p
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(t(&format!("rarity.{}", p.rarity.id()))));
    html! {
        <span class={rarity_class(p.rarity)} data-rarity={p.rarity.id()}>{ text }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn badge_uses_rarity_label_by_default() {
        crate::i18n::set_lang("ru");
        let props = Props {
            rarity: Rarity::Legendary,
            label: None,
        };
        let html = block_on(LocalServerRenderer::<RarityBadge>::with_props(props).render());
        assert!(html.contains("badge-legendary"));
        assert!(html.contains("⭐ Легендарный"));
    }

    #[test]
    fn badge_accepts_custom_label() {
        let props = Props {
            rarity: Rarity::Common,
            label: Some(AttrValue::from("Зелья")),
        };
        let html = block_on(LocalServerRenderer::<RarityBadge>::with_props(props).render());
        assert!(html.contains("badge-common"));
        assert!(html.contains("Зелья"));
    }
}
