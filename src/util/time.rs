//! Wall-clock access for message timestamps.
//!
//! Pure state code takes timestamps as arguments so tests control time; this
//! is the single place the browser clock is read.

/// Current time as an ISO 8601 string. Empty off-browser.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Render an ISO 8601 timestamp as a short local time for chat bubbles.
/// Falls back to the raw string off-browser or when parsing fails.
#[must_use]
pub fn short_time(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "csr"))]
    {
        iso.to_owned()
    }
}
