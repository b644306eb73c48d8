use crate::components::header::ADD_BUTTON_ID;
use crate::shop::{Catalog, DraftError, ItemDraft, ShopConfig, ShopState, Tab};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: &'static ShopConfig,
    pub shop: UseStateHandle<ShopState>,
    pub cart_open: UseStateHandle<bool>,
    pub add_item_open: UseStateHandle<bool>,
    pub add_item_focus: UseStateHandle<AttrValue>,
    pub draft: UseStateHandle<ItemDraft>,
    pub draft_error: UseStateHandle<Option<DraftError>>,
    pub high_contrast: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state(initial_tab: Tab) -> AppState {
    AppState {
        catalog: crate::shop::shop_catalog(),
        config: crate::shop::shop_config(),
        shop: use_state(|| ShopState {
            tab: initial_tab,
            ..ShopState::default()
        }),
        cart_open: use_state(|| false),
        add_item_open: use_state(|| false),
        add_item_focus: use_state(|| AttrValue::from(ADD_BUTTON_ID)),
        draft: use_state(ItemDraft::default),
        draft_error: use_state(|| None::<DraftError>),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Distinct cart entries, shown on the navbar badge.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.shop.cart.len()
    }
}
