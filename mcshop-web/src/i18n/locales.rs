use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ru",
        name: "Русский",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

/// Locale whose bundle backs every missing key.
pub const FALLBACK_LANG: &str = "ru";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ru", include_str!("../../i18n/ru.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_parseable_bundle() {
        for meta in locales() {
            assert!(load_translations(meta.code).is_some(), "{}", meta.code);
        }
        assert!(load_translations("xx").is_none());
        assert!(!is_supported("xx"));
    }
}
