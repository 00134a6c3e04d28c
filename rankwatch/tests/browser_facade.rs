#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;

use rankwatch::facades::wasm::watch::{
    current_leaderboard, is_leaderboard_watch_running, notification_permission,
    set_observed_user, should_offer_notification_prompt, start_leaderboard_watch,
    stop_leaderboard_watch,
};
use rankwatch::PermissionState;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn watch_config(poll_interval_ms: f64) -> JsValue {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &"endpoint".into(),
        &"https://example.com/leaderboard/all".into(),
    )
    .unwrap();
    js_sys::Reflect::set(&config, &"pollIntervalMs".into(), &poll_interval_ms.into()).unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn test_permission_is_reported() {
    let permission: PermissionState = notification_permission().parse().unwrap();
    assert_eq!(
        should_offer_notification_prompt(),
        permission == PermissionState::Default
    );
}

#[wasm_bindgen_test]
fn test_start_requires_endpoint() {
    assert!(start_leaderboard_watch(JsValue::UNDEFINED).is_err());
    assert!(!is_leaderboard_watch_running());
}

#[wasm_bindgen_test]
fn test_start_rejects_invalid_config() {
    assert!(start_leaderboard_watch(watch_config(0.0)).is_err());
}

#[wasm_bindgen_test]
fn test_start_and_stop() {
    set_observed_user(Some("42".to_string()));

    start_leaderboard_watch(watch_config(60_000.0)).unwrap();
    assert!(is_leaderboard_watch_running());
    assert!(current_leaderboard().unwrap().is_null());

    stop_leaderboard_watch();
    assert!(!is_leaderboard_watch_running());
    set_observed_user(None);
}
