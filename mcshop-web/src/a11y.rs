// Accessibility helpers

use wasm_bindgen::JsCast;

/// Live region id used for cart and form announcements.
pub const STATUS_REGION_ID: &str = "shop-status";

const HC_STORAGE_KEY: &str = "mcshop.hc";

const FOCUSABLE: &str =
    "button:not([disabled]), [href], input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// CSS for visible focus indicators and the screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #5DA130;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the polite live region so assistive technology announces `msg`.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Toggle high-contrast mode
///
/// Adds or removes the `hc` class on the root element and persists the choice.
pub fn set_high_contrast(enabled: bool) {
    let Some(win) = crate::dom::window() else {
        return;
    };

    if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
        let _ = if enabled {
            html.class_list().add_1("hc")
        } else {
            html.class_list().remove_1("hc")
        };
    }

    if let Some(storage) = win.local_storage().ok().flatten() {
        let _ = storage.set_item(HC_STORAGE_KEY, if enabled { "1" } else { "0" });
    }
}

/// Whether the saved preference asks for high contrast.
#[must_use]
pub fn high_contrast_enabled() -> bool {
    crate::dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(HC_STORAGE_KEY).ok().flatten())
        .is_some_and(|v| v == "1")
}

/// Move focus to the first focusable element inside `container_id`.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = crate::dom::document().and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };
    if let Some(el) = container
        .query_selector(FOCUSABLE)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Return focus to the element with `id`, typically the control that opened
/// a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
