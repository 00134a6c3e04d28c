use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}

/// Reads an optional JS object into `T`; `undefined` and `null` yield the
/// default.
pub fn js_value_or_default<T>(value: JsValue) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(to_js_error)
}
