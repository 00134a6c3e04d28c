use super::converters;
use crate::adapters::wasm::{HttpSnapshotSource, Notifier};
use crate::adapters::SharedSession;
use crate::config::WatchConfig;
use crate::domain::notification::NotificationGateway;
use crate::platform::Platform;
use crate::watch::LeaderboardWatcher;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

thread_local! {
    static SESSION: Arc<SharedSession> = Arc::new(SharedSession::new());
    static GATEWAY: Rc<NotificationGateway> =
        Rc::new(NotificationGateway::new(Platform::new(), Arc::new(Notifier::new())));
    static WATCHER: RefCell<Option<LeaderboardWatcher>> = const { RefCell::new(None) };
}

fn session() -> Arc<SharedSession> {
    SESSION.with(Arc::clone)
}

fn gateway() -> Rc<NotificationGateway> {
    GATEWAY.with(Rc::clone)
}

/// Starts polling the leaderboard. `config` is a partial `WatchConfig`
/// object (camelCase keys); `endpoint` is required. A watch already running
/// is stopped and replaced, its history is not carried over.
#[wasm_bindgen]
pub fn start_leaderboard_watch(config: JsValue) -> Result<(), JsValue> {
    let config: WatchConfig = converters::js_value_or_default(config)?;
    let source = Rc::new(HttpSnapshotSource::from_config(&config)?);

    let watcher = LeaderboardWatcher::new(Platform::new(), config, source, session(), gateway())?;
    watcher.start()?;

    if let Some(previous) = WATCHER.with(|w| w.borrow_mut().replace(watcher)) {
        previous.stop();
    }
    Ok(())
}

/// Stops polling. The last leaderboard stays readable.
#[wasm_bindgen]
pub fn stop_leaderboard_watch() {
    WATCHER.with(|w| {
        if let Some(watcher) = w.borrow().as_ref() {
            watcher.stop();
        }
    });
}

#[wasm_bindgen]
pub fn is_leaderboard_watch_running() -> bool {
    WATCHER.with(|w| w.borrow().as_ref().is_some_and(LeaderboardWatcher::is_running))
}

/// Sets or clears the user whose top-tier membership is tracked.
#[wasm_bindgen]
pub fn set_observed_user(user_id: Option<String>) {
    session().set_user(user_id.map(Into::into));
}

/// "granted", "denied" or "default".
#[wasm_bindgen]
pub fn notification_permission() -> String {
    gateway().permission_state().as_str().to_string()
}

/// Must be called from a user gesture handler.
#[wasm_bindgen]
pub async fn request_notification_permission() -> String {
    gateway().request_permission().await.as_str().to_string()
}

#[wasm_bindgen]
pub fn should_offer_notification_prompt() -> bool {
    gateway().should_offer_prompt()
}

/// The latest leaderboard as an array of entries, or `null` before the
/// first successful fetch.
#[wasm_bindgen]
pub fn current_leaderboard() -> Result<JsValue, JsValue> {
    let current = WATCHER.with(|w| w.borrow().as_ref().and_then(LeaderboardWatcher::current));
    converters::to_js_value(&current)
}
