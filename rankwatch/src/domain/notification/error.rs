#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("Notifications are not supported: {0}")]
    Unsupported(String),
    #[error("Permission request failed: {0}")]
    PermissionRequestFailed(String),
    #[error("Failed to display notification: {0}")]
    DeliveryFailed(String),
}

impl NotificationError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        NotificationError::Unsupported(message.into())
    }

    pub fn permission_request_failed(message: impl Into<String>) -> Self {
        NotificationError::PermissionRequestFailed(message.into())
    }

    pub fn delivery_failed(message: impl Into<String>) -> Self {
        NotificationError::DeliveryFailed(message.into())
    }
}
