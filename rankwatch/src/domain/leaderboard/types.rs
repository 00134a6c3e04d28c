use super::error::LeaderboardError;
use super::validation::validate_entries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque competitor identifier.
///
/// The leaderboard service hands out numeric ids while the session layer
/// may carry them as strings; both normalise to the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub display_name: String,
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(user_id: impl Into<UserId>, display_name: impl Into<String>, score: i64) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            score,
        }
    }
}

/// Ranking at one point in time.
///
/// Entries are ordered by non-increasing score and every user appears at
/// most once; the position of an entry is its zero-based rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<LeaderboardEntry>",
    into = "Vec<LeaderboardEntry>"
)]
pub struct Snapshot {
    entries: Vec<LeaderboardEntry>,
}

impl Snapshot {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Result<Self, LeaderboardError> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    /// Zero-based rank of `user_id`, or `None` when the user is not ranked.
    pub fn position_of(&self, user_id: &UserId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.user_id == user_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<LeaderboardEntry>> for Snapshot {
    type Error = LeaderboardError;

    fn try_from(entries: Vec<LeaderboardEntry>) -> Result<Self, Self::Error> {
        Snapshot::new(entries)
    }
}

impl From<Snapshot> for Vec<LeaderboardEntry> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NotificationEvent {
    NewLeader { entry: LeaderboardEntry },
    /// The observed user left the top tier; `new_rank` is 1-based.
    #[serde(rename_all = "camelCase")]
    DroppedFromTop { new_rank: usize },
    None,
}

impl NotificationEvent {
    pub fn is_none(&self) -> bool {
        matches!(self, NotificationEvent::None)
    }
}
