use crate::domain::notification::{NotificationError, PermissionState};
use async_trait::async_trait;

/// Platform alert surface.
///
/// Adapters report the raw platform state and perform raw delivery;
/// permission gating lives in [`crate::domain::notification::NotificationGateway`].
#[async_trait(?Send)]
pub trait NotifierPort: Send + Sync {
    /// Current platform authorisation.
    fn permission(&self) -> PermissionState;

    /// Shows the platform permission prompt and returns the user's answer.
    async fn request_permission(&self) -> Result<PermissionState, NotificationError>;

    /// Displays an alert.
    fn show(&self, title: &str, body: &str) -> Result<(), NotificationError>;
}
