use crate::domain::leaderboard::LeaderboardError;
use wasm_bindgen::prelude::*;
use web_sys::DedicatedWorkerGlobalScope;

pub fn get_global_scope() -> Result<JsValue, LeaderboardError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window().ok_or_else(|| {
        LeaderboardError::source_unavailable("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}
