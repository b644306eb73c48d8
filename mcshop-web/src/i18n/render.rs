use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;

    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else if count.abs() < f64::EPSILON {
        "zero".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let by_count = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .and_then(|count| map.get(&plural_category(lang, count)))
                .and_then(Value::as_str);
            by_count
                .or_else(|| map.get("_").and_then(Value::as_str))?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to the Russian bundle, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
/// A `count` variable selects a plural form when the entry is an object.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
