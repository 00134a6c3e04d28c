use super::types::PermissionState;
use crate::domain::leaderboard::NotificationMessage;
use crate::platform::Platform;
use crate::ports::NotifierPort;
use parking_lot::Mutex;
use std::sync::Arc;

/// Permission-gated access to the platform alert surface.
///
/// The gateway caches the permission state. While it is `Default` the
/// platform is consulted on every read; once `Granted` or `Denied` it is
/// final for the lifetime of the gateway.
pub struct NotificationGateway {
    platform: Platform,
    notifier: Arc<dyn NotifierPort>,
    state: Mutex<PermissionState>,
}

impl NotificationGateway {
    pub fn new(platform: Platform, notifier: Arc<dyn NotifierPort>) -> Self {
        let state = notifier.permission();
        Self {
            platform,
            notifier,
            state: Mutex::new(state),
        }
    }

    pub fn permission_state(&self) -> PermissionState {
        let mut state = self.state.lock();
        if !state.is_terminal() {
            *state = self.notifier.permission();
        }
        *state
    }

    /// Whether the UI should show its "enable notifications" trigger.
    pub fn should_offer_prompt(&self) -> bool {
        self.permission_state() == PermissionState::Default
    }

    /// Asks the platform for permission. Only call this from a user gesture;
    /// browsers ignore programmatic prompts.
    ///
    /// A dismissed prompt or a failing platform settles on `Denied`.
    pub async fn request_permission(&self) -> PermissionState {
        let current = self.permission_state();
        if current.is_terminal() {
            return current;
        }

        let settled = match self.notifier.request_permission().await {
            Ok(PermissionState::Granted) => PermissionState::Granted,
            Ok(PermissionState::Denied) => PermissionState::Denied,
            Ok(PermissionState::Default) => {
                self.platform
                    .logger()
                    .warn("Notification prompt dismissed, treating as denied");
                PermissionState::Denied
            }
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("Notification permission request failed: {e}"));
                PermissionState::Denied
            }
        };

        *self.state.lock() = settled;
        self.platform
            .logger()
            .log(&format!("Notification permission settled: {settled}"));
        settled
    }

    /// Raises an alert when permission is granted; silently does nothing
    /// otherwise.
    pub fn notify(&self, title: &str, body: &str) {
        if self.permission_state() != PermissionState::Granted {
            return;
        }

        if let Err(e) = self.notifier.show(title, body) {
            self.platform
                .logger()
                .warn(&format!("Notification not delivered: {e}"));
        }
    }

    pub fn deliver(&self, message: &NotificationMessage) {
        self.notify(&message.title, &message.body);
    }
}
