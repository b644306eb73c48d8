//! "Add item" dialog. Collects and validates a draft; nothing is published.
use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use crate::shop::{DraftError, DraftField, ItemDraft};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub draft: ItemDraft,
    #[prop_or_default]
    pub error: Option<DraftError>,
    pub on_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

/// Localised message for a validation failure.
#[must_use]
pub fn draft_error_message(err: &DraftError) -> String {
    match err {
        DraftError::BlankName => t("add_item.errors.blank_name"),
        DraftError::UnknownCategory(value) => tr(
            "add_item.errors.unknown_category",
            Some(&BTreeMap::from([("value", value.as_str())])),
        ),
        DraftError::InvalidPrice(_) => t("add_item.errors.invalid_price"),
        DraftError::BlankDescription => t("add_item.errors.blank_description"),
    }
}

const fn field_id(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => "draft-name",
        DraftField::Category => "draft-category",
        DraftField::Price => "draft-price",
        DraftField::Description => "draft-description",
    }
}

fn field_input(field: DraftField, p: &Props) -> Html {
    let id = field_id(field);
    let (label, placeholder, value) = match field {
        DraftField::Name => ("add_item.name", "add_item.name_placeholder", &p.draft.name),
        DraftField::Category => (
            "add_item.category",
            "add_item.category_placeholder",
            &p.draft.category,
        ),
        DraftField::Price => ("add_item.price", "add_item.price_placeholder", &p.draft.price),
        DraftField::Description => (
            "add_item.details",
            "add_item.details_placeholder",
            &p.draft.description,
        ),
    };
    let invalid = p.error.as_ref().is_some_and(|err| err.field() == field);
    let error_id = format!("{id}-error");
    let on_input = {
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    e.target_dyn_into::<web_sys::HtmlTextAreaElement>()
                        .map(|area| area.value())
                });
            if let Some(value) = value {
                cb.emit((field, value));
            }
        })
    };

    let control = if field == DraftField::Description {
        html! {
            <textarea
                id={id}
                placeholder={t(placeholder)}
                value={value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={invalid.then(|| error_id.clone())}
                oninput={on_input} />
        }
    } else {
        html! {
            <input
                id={id}
                type={if field == DraftField::Price { "number" } else { "text" }}
                placeholder={t(placeholder)}
                value={value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={invalid.then(|| error_id.clone())}
                oninput={on_input} />
        }
    };

    html! {
        <div class={classes!("field", invalid.then_some("invalid"))}>
            <label for={id}>{ t(label) }</label>
            { control }
            { p.error.as_ref().filter(|_| invalid).map(|err| html! {
                <p id={error_id.clone()} class="error" role="alert">{ draft_error_message(err) }</p>
            }).unwrap_or_default() }
        </div>
    }
}

#[function_component(AddItemDialog)]
pub fn add_item_dialog(p: &Props) -> Html {
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <Modal
            open={p.open}
            title={AttrValue::from(t("add_item.title"))}
            description={Some(AttrValue::from(t("add_item.description")))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}>
            <form class="add-item-form" onsubmit={on_submit}>
                { for [DraftField::Name, DraftField::Category, DraftField::Price, DraftField::Description]
                    .into_iter()
                    .map(|field| field_input(field, p)) }
                <button type="submit" class="retro-btn-primary">{ t("add_item.submit") }</button>
            </form>
        </Modal>
    }
}
