use crate::domain::leaderboard::{LeaderboardError, Snapshot};
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait SnapshotSourcePort {
    /// Fetches the latest ranking.
    async fn fetch(&self) -> Result<Snapshot, LeaderboardError>;
}
