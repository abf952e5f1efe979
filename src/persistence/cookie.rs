//! `document.cookie` encoding
//!
//! The parsing and formatting halves are plain string functions so they can be
//! tested natively; only [`CookieStore`] touches the browser.

/// Milliseconds in a day
const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Build a `name=value;expires=...;path=/` assignment.
///
/// `expires_utc` must already be an HTTP date (`Date.toUTCString()`).
pub fn assignment(name: &str, value: &str, expires_utc: &str) -> String {
    format!("{name}={value};expires={expires_utc};path=/")
}

/// Expiry timestamp (ms since epoch) `days` after `now_ms`
pub fn expiry_ms(now_ms: f64, days: u32) -> f64 {
    now_ms + days as f64 * DAY_MS
}

/// Find `name` in a `document.cookie` string (`a=1; b=2`)
pub fn lookup(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
pub use web::CookieStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::super::FlagStore;
    use super::{assignment, expiry_ms, lookup};

    /// [`FlagStore`] backed by `document.cookie`
    pub struct CookieStore {
        document: Option<HtmlDocument>,
    }

    impl CookieStore {
        pub fn new() -> Self {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<HtmlDocument>().ok());
            if document.is_none() {
                log::warn!("No HTML document - cookies disabled");
            }
            Self { document }
        }
    }

    impl Default for CookieStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FlagStore for CookieStore {
        fn get(&self, name: &str) -> Option<String> {
            let cookies = self.document.as_ref()?.cookie().ok()?;
            let decoded = js_sys::decode_uri_component(&cookies)
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or(cookies);
            lookup(&decoded, name)
        }

        fn set(&mut self, name: &str, value: &str, max_age_days: u32) {
            let Some(document) = &self.document else {
                return;
            };
            let expires = expiry_ms(js_sys::Date::now(), max_age_days);
            let expires = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(expires));
            let utc: String = expires.to_utc_string().into();
            if document.set_cookie(&assignment(name, value, &utc)).is_err() {
                log::warn!("Failed to write cookie {}", name);
            }
        }
    }
}
