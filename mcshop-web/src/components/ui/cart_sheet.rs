use crate::components::header::CART_BUTTON_ID;
use crate::components::modal::Modal;
use crate::i18n::t;
use crate::shop::{Cart, CartEntry, ItemId, fmt_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub cart: Cart,
    pub on_close: Callback<()>,
    /// Emits `(id, requested quantity)`; zero or below removes the entry
    pub on_update_quantity: Callback<(ItemId, i64)>,
    pub on_remove: Callback<ItemId>,
    #[prop_or_default]
    pub on_checkout: Callback<()>,
}

fn render_entry(entry: &CartEntry, p: &Props) -> Html {
    let id = entry.item.id;
    let qty = i64::from(entry.quantity);
    let dec = {
        let cb = p.on_update_quantity.clone();
        Callback::from(move |_| cb.emit((id, qty - 1)))
    };
    let inc = {
        let cb = p.on_update_quantity.clone();
        Callback::from(move |_| cb.emit((id, qty + 1)))
    };
    let remove = {
        let cb = p.on_remove.clone();
        Callback::from(move |_| cb.emit(id))
    };

    html! {
        <li class="cart-entry" data-item-id={id.to_string()}>
            <img class="cart-entry__image" src={entry.item.image.clone()} alt={entry.item.name.clone()} />
            <div class="cart-entry__body">
                <h4>{ entry.item.name.clone() }</h4>
                <p class="muted">{ fmt_price(u64::from(entry.item.price)) }</p>
                <div class="cart-entry__controls">
                    <button type="button" class="qty-btn" aria-label={t("cart.decrease")} onclick={dec}>{"-"}</button>
                    <span class="qty" aria-live="polite">{ entry.quantity }</span>
                    <button type="button" class="qty-btn" aria-label={t("cart.increase")} onclick={inc}>{"+"}</button>
                    <button type="button" class="remove-btn" aria-label={t("cart.remove")} onclick={remove}>{"🗑"}</button>
                </div>
            </div>
        </li>
    }
}

#[function_component(CartSheet)]
pub fn cart_sheet(p: &Props) -> Html {
    let on_checkout = {
        let cb = p.on_checkout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = if p.cart.is_empty() {
        html! { <p class="empty-cart">{ t("cart.empty") }</p> }
    } else {
        html! {
            <>
                <ul class="cart-entries">
                    { for p.cart.entries().map(|entry| render_entry(entry, p)) }
                </ul>
                <div class="cart-summary">
                    <div class="cart-total">
                        <span class="label">{ t("cart.total") }</span>
                        <span class="value">{ fmt_price(p.cart.total_price()) }</span>
                    </div>
                    <button type="button" class="retro-btn-primary checkout" onclick={on_checkout}>
                        { t("cart.checkout") }
                    </button>
                </div>
            </>
        }
    };

    html! {
        <Modal
            open={p.open}
            title={AttrValue::from(t("cart.title"))}
            description={Some(AttrValue::from(t("cart.description")))}
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from(CART_BUTTON_ID))}
            class={classes!("sheet")}>
            { body }
        </Modal>
    }
}
