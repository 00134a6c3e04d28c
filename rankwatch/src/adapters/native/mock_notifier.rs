use crate::domain::leaderboard::NotificationMessage;
use crate::domain::notification::{NotificationError, PermissionState};
use crate::ports::NotifierPort;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Scriptable notifier for tests and headless hosts.
///
/// Records every `show` call it receives, whatever the permission state,
/// so callers can assert that gating happened upstream.
pub struct MockNotifier {
    permission: Mutex<PermissionState>,
    response: Mutex<Result<PermissionState, NotificationError>>,
    requests: AtomicUsize,
    fail_delivery: AtomicBool,
    alerts: Mutex<Vec<NotificationMessage>>,
}

impl MockNotifier {
    pub fn new(permission: PermissionState) -> Self {
        Self {
            permission: Mutex::new(permission),
            response: Mutex::new(Ok(PermissionState::Granted)),
            requests: AtomicUsize::new(0),
            fail_delivery: AtomicBool::new(false),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }

    /// Sets the answer returned by the next permission prompts.
    pub fn with_response(self, response: Result<PermissionState, NotificationError>) -> Self {
        *self.response.lock() = response;
        self
    }

    /// Simulates an out-of-band change, e.g. from browser settings.
    pub fn set_platform_permission(&self, permission: PermissionState) {
        *self.permission.lock() = permission;
    }

    pub fn fail_delivery(&self, fail: bool) {
        self.fail_delivery.store(fail, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn alerts(&self) -> Vec<NotificationMessage> {
        self.alerts.lock().clone()
    }
}

#[async_trait(?Send)]
impl NotifierPort for MockNotifier {
    fn permission(&self) -> PermissionState {
        *self.permission.lock()
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let response = self.response.lock().clone();
        if let Ok(state) = &response {
            *self.permission.lock() = *state;
        }
        response
    }

    fn show(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        if self.fail_delivery.load(Ordering::SeqCst) {
            return Err(NotificationError::delivery_failed("mock delivery failure"));
        }
        self.alerts.lock().push(NotificationMessage {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
