use crate::app::routing::next_route_for_tab;
use crate::app::state::AppState;
use crate::i18n::{t, tr};
use crate::router::Route;
use crate::shop::{Catalog, CategoryFilter, DraftField, ItemDraft, ItemId, ShopState, Tab};
use std::collections::BTreeMap;
use yew::prelude::*;

/// A cart mutation requested from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add(ItemId),
    SetQuantity(ItemId, i64),
    Remove(ItemId),
}

/// New view state after a cart action, plus the live-region message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOutcome {
    pub state: ShopState,
    pub announcement: String,
}

/// Apply `action` to a copy of `current`.
///
/// Returns `None` when nothing changes: adding an id missing from the
/// catalog, or touching an id that is not in the cart.
#[must_use]
pub fn cart_action_outcome(
    current: &ShopState,
    catalog: &Catalog,
    action: CartAction,
) -> Option<CartOutcome> {
    let mut next = current.clone();
    let announcement = match action {
        CartAction::Add(id) => {
            let item = catalog.find(id)?;
            let qty = next.cart.add_to_cart(item).to_string();
            tr(
                "status.added",
                Some(&BTreeMap::from([
                    ("item", item.name.as_str()),
                    ("qty", qty.as_str()),
                ])),
            )
        }
        CartAction::SetQuantity(id, quantity) => {
            let name = cart_entry_name(current, id)?;
            next.cart.update_quantity(id, quantity);
            if next.cart.contains(id) {
                let qty = next.cart.quantity(id).to_string();
                tr(
                    "status.quantity",
                    Some(&BTreeMap::from([
                        ("item", name.as_str()),
                        ("qty", qty.as_str()),
                    ])),
                )
            } else {
                removed_status(&name)
            }
        }
        CartAction::Remove(id) => {
            let name = cart_entry_name(current, id)?;
            next.cart.remove_from_cart(id);
            removed_status(&name)
        }
    };
    Some(CartOutcome {
        state: next,
        announcement,
    })
}

fn cart_entry_name(state: &ShopState, id: ItemId) -> Option<String> {
    state
        .cart
        .entries()
        .find(|entry| entry.item.id == id)
        .map(|entry| entry.item.name.clone())
}

fn removed_status(name: &str) -> String {
    tr("status.removed", Some(&BTreeMap::from([("item", name)])))
}

#[derive(Clone)]
pub struct AppHandlers {
    pub add_to_cart: Callback<ItemId>,
    pub update_quantity: Callback<(ItemId, i64)>,
    pub remove_from_cart: Callback<ItemId>,
    pub select_tab: Callback<Tab>,
    pub search: Callback<String>,
    pub category: Callback<CategoryFilter>,
    pub open_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub open_add_item: Callback<AttrValue>,
    pub close_add_item: Callback<()>,
    pub draft_change: Callback<(DraftField, String)>,
    pub submit_draft: Callback<()>,
    pub checkout: Callback<()>,
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, route: Option<&Route>, on_navigate: &Callback<Route>) -> Self {
        Self {
            add_to_cart: build_cart_action(state, CartAction::Add),
            update_quantity: build_cart_action(state, |(id, qty): (ItemId, i64)| {
                CartAction::SetQuantity(id, qty)
            }),
            remove_from_cart: build_cart_action(state, CartAction::Remove),
            select_tab: build_select_tab(state, route.cloned(), on_navigate.clone()),
            search: build_search(state),
            category: build_category(state),
            open_cart: build_toggle(&state.cart_open, true),
            close_cart: build_toggle(&state.cart_open, false),
            open_add_item: build_open_add_item(state),
            close_add_item: build_close_add_item(state),
            draft_change: build_draft_change(state),
            submit_draft: build_submit_draft(state),
            checkout: build_checkout(),
            lang_change: build_lang_change(state),
            toggle_hc: build_toggle_hc(state),
        }
    }
}

fn build_cart_action<T: 'static>(
    state: &AppState,
    to_action: impl Fn(T) -> CartAction + 'static,
) -> Callback<T> {
    let shop = state.shop.clone();
    let catalog = state.catalog;
    Callback::from(move |input: T| {
        let action = to_action(input);
        match cart_action_outcome(&shop, catalog, action) {
            Some(outcome) => {
                crate::a11y::set_status(&outcome.announcement);
                shop.set(outcome.state);
            }
            None => log::warn!("cart action {action:?} had no effect"),
        }
    })
}

fn build_select_tab(
    state: &AppState,
    route: Option<Route>,
    on_navigate: Callback<Route>,
) -> Callback<Tab> {
    let shop = state.shop.clone();
    Callback::from(move |tab: Tab| {
        if shop.tab != tab {
            let mut next = (*shop).clone();
            next.select_tab(tab);
            shop.set(next);
        }
        if let Some(new_route) = next_route_for_tab(tab, route.as_ref()) {
            on_navigate.emit(new_route);
        }
    })
}

fn build_search(state: &AppState) -> Callback<String> {
    let shop = state.shop.clone();
    Callback::from(move |search: String| {
        let mut next = (*shop).clone();
        next.set_search(search);
        shop.set(next);
    })
}

fn build_category(state: &AppState) -> Callback<CategoryFilter> {
    let shop = state.shop.clone();
    Callback::from(move |category: CategoryFilter| {
        let mut next = (*shop).clone();
        next.set_category(category);
        shop.set(next);
    })
}

fn build_toggle(handle: &UseStateHandle<bool>, value: bool) -> Callback<()> {
    let handle = handle.clone();
    Callback::from(move |()| handle.set(value))
}

fn build_open_add_item(state: &AppState) -> Callback<AttrValue> {
    let open = state.add_item_open.clone();
    let focus = state.add_item_focus.clone();
    Callback::from(move |return_to: AttrValue| {
        focus.set(return_to);
        open.set(true);
    })
}

fn build_close_add_item(state: &AppState) -> Callback<()> {
    let open = state.add_item_open.clone();
    let error = state.draft_error.clone();
    Callback::from(move |()| {
        error.set(None);
        open.set(false);
    })
}

fn build_draft_change(state: &AppState) -> Callback<(DraftField, String)> {
    let draft = state.draft.clone();
    let error = state.draft_error.clone();
    Callback::from(move |(field, value): (DraftField, String)| {
        let mut next = (*draft).clone();
        next.set(field, value);
        if (*error).as_ref().is_some_and(|err| err.field() == field) {
            error.set(None);
        }
        draft.set(next);
    })
}

fn build_submit_draft(state: &AppState) -> Callback<()> {
    let draft = state.draft.clone();
    let error = state.draft_error.clone();
    let open = state.add_item_open.clone();
    Callback::from(move |()| match draft.validate() {
        Ok(valid) => {
            log::info!(
                "item draft accepted: {} ({}, {})",
                valid.name,
                valid.category.id(),
                valid.price
            );
            crate::a11y::set_status(&tr(
                "status.draft_checked",
                Some(&BTreeMap::from([("name", valid.name.as_str())])),
            ));
            draft.set(ItemDraft::default());
            error.set(None);
            open.set(false);
        }
        Err(err) => {
            log::debug!("item draft rejected: {err}");
            error.set(Some(err));
        }
    })
}

fn build_checkout() -> Callback<()> {
    Callback::from(|()| crate::a11y::set_status(&t("status.checkout_unavailable")))
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

fn build_toggle_hc(state: &AppState) -> Callback<bool> {
    let high_contrast = state.high_contrast.clone();
    Callback::from(move |next: bool| {
        crate::a11y::set_high_contrast(next);
        high_contrast.set(next);
    })
}
