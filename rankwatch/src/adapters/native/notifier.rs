use crate::domain::notification::{NotificationError, PermissionState};
use crate::ports::NotifierPort;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Native notifier adapter.
///
/// There is no desktop permission prompt on native builds: the answer to a
/// permission request is fixed at construction time and alerts are written
/// to the `log` facade.
pub struct Notifier {
    permission: Mutex<PermissionState>,
    auto_grant: bool,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_auto_grant(false)
    }

    pub fn with_auto_grant(auto_grant: bool) -> Self {
        Self {
            permission: Mutex::new(PermissionState::Default),
            auto_grant,
        }
    }
}

#[async_trait(?Send)]
impl NotifierPort for Notifier {
    fn permission(&self) -> PermissionState {
        *self.permission.lock()
    }

    async fn request_permission(&self) -> Result<PermissionState, NotificationError> {
        let answer = if self.auto_grant {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
        *self.permission.lock() = answer;
        Ok(answer)
    }

    fn show(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        log::info!(target: "rankwatch::alert", "{title}: {body}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_notifier_starts_in_default() {
        assert_eq!(Notifier::new().permission(), PermissionState::Default);
    }

    #[test]
    fn test_request_without_auto_grant_denies() {
        let notifier = Notifier::new();
        assert_eq!(
            block_on(notifier.request_permission()),
            Ok(PermissionState::Denied)
        );
        assert_eq!(notifier.permission(), PermissionState::Denied);
    }

    #[test]
    fn test_request_with_auto_grant_grants() {
        let notifier = Notifier::with_auto_grant(true);
        assert_eq!(
            block_on(notifier.request_permission()),
            Ok(PermissionState::Granted)
        );
    }

    #[test]
    fn test_show_never_fails() {
        assert!(Notifier::new().show("title", "body").is_ok());
    }
}
