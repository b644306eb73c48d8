use crate::i18n::locales::{FALLBACK_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "mcshop.locale";

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(FALLBACK_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(FALLBACK_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: FALLBACK_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(default_lang)
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        default_lang()
    }
}

fn default_lang() -> String {
    crate::shop::shop_config().default_locale.clone()
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language
///
/// Unknown codes are ignored. On the web the `<html lang>` attribute is
/// updated and the choice is persisted to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang:?} ignored");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("en").expect("bundle should load");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn unknown_locale_has_no_bundle() {
        assert!(build_bundle("tlh").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_russian() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "ru");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn set_lang_ignores_unknown_codes() {
        set_lang("en");
        set_lang("tlh");
        assert_eq!(current_lang(), "en");
        set_lang("ru");
        assert_eq!(current_lang(), "ru");
    }
}
