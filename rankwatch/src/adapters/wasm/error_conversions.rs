use crate::domain::leaderboard::LeaderboardError;
use crate::domain::notification::NotificationError;
use wasm_bindgen::JsValue;

pub fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "Unknown JavaScript error".to_string())
}

/// Conversion from JsValue to LeaderboardError for WASM infrastructure
impl From<JsValue> for LeaderboardError {
    fn from(err: JsValue) -> Self {
        LeaderboardError::source_unavailable(js_error_message(&err))
    }
}

/// Conversion from LeaderboardError to JsValue for WASM boundary
impl From<LeaderboardError> for JsValue {
    fn from(error: LeaderboardError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<NotificationError> for JsValue {
    fn from(error: NotificationError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
