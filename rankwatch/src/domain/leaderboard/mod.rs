pub mod diff;
pub mod error;
pub mod messages;
pub mod serialization;
pub mod store;
pub mod types;
pub mod validation;

pub use diff::{classify, classify_with_top_tier, DEFAULT_TOP_TIER};
pub use error::LeaderboardError;
pub use messages::{render, NotificationMessage};
pub use serialization::{decode_snapshot, encode_request, LeaderboardRequest};
pub use store::SnapshotStore;
pub use types::{LeaderboardEntry, NotificationEvent, Snapshot, UserId};
pub use validation::validate_entries;
