pub mod error;
pub mod gateway;
pub mod types;

pub use error::NotificationError;
pub use gateway::NotificationGateway;
pub use types::PermissionState;
