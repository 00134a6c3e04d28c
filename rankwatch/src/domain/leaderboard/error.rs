use super::types::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("Duplicate entry for user {0}")]
    DuplicateEntry(UserId),
    #[error("Snapshot not sorted by score at index {index}")]
    Unsorted { index: usize },
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Snapshot source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LeaderboardError {
    pub fn malformed(message: impl Into<String>) -> Self {
        LeaderboardError::MalformedSnapshot(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        LeaderboardError::Decode(message.into())
    }

    pub fn source_unavailable(message: impl Into<String>) -> Self {
        LeaderboardError::SourceUnavailable(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        LeaderboardError::InvalidConfig(message.into())
    }
}
