//! Timestamp display formatting.

/// Render a server timestamp in the browser's locale. Host builds pass the
/// raw ISO-8601 text through.
pub fn local_datetime(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        iso.to_owned()
    }
}
