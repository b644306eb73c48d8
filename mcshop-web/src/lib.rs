#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;
pub mod shop;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::init_logging();
    // Ensure <html lang> matches the saved locale before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    if crate::a11y::high_contrast_enabled() {
        crate::a11y::set_high_contrast(true);
    }
    log::info!(
        "MC Shop starting with {} catalog items",
        crate::shop::shop_catalog().len()
    );
    yew::Renderer::<app::App>::new().render();
}
