extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod config;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;
pub mod watch;

#[cfg(target_arch = "wasm32")]
pub mod global;

pub use config::{OverlapPolicy, WatchConfig};
pub use domain::leaderboard::{
    classify, LeaderboardEntry, LeaderboardError, NotificationEvent, Snapshot, UserId,
};
pub use domain::notification::{NotificationGateway, PermissionState};
#[cfg(not(target_arch = "wasm32"))]
pub use facades::native::LeaderboardMonitor;
pub use platform::Platform;
pub use watch::{LeaderboardWatcher, Poller};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
