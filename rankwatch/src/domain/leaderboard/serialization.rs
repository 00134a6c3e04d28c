use super::error::LeaderboardError;
use super::types::{LeaderboardEntry, Snapshot, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the leaderboard query sent to the ranking service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRequest {
    pub rating_field_name: String,
    pub cursor: u32,
    pub limit: u32,
}

impl LeaderboardRequest {
    pub fn new(rating_field_name: impl Into<String>, limit: u32) -> Self {
        Self {
            rating_field_name: rating_field_name.into(),
            cursor: 0,
            limit,
        }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    data: RawData,
}

#[derive(Deserialize)]
struct RawData {
    #[serde(rename = "userData")]
    user_data: RawUser,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawUser {
    id: RawId,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for UserId {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => UserId::from(n),
            RawId::Text(s) => UserId::from(s),
        }
    }
}

pub fn encode_request(request: &LeaderboardRequest) -> Result<String, LeaderboardError> {
    serde_json::to_string(request)
        .map_err(|e| LeaderboardError::decode(format!("Failed to serialize request: {e}")))
}

/// Decodes the ranking service response into a validated [`Snapshot`].
///
/// The score is read from `rating_field`; it must be an integer.
pub fn decode_snapshot(json: &str, rating_field: &str) -> Result<Snapshot, LeaderboardError> {
    let records: Vec<RawRecord> = serde_json::from_str(json)
        .map_err(|e| LeaderboardError::decode(format!("Failed to parse leaderboard: {e}")))?;

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_entry(index, record.data, rating_field))
        .collect::<Result<Vec<_>, _>>()?;

    Snapshot::new(entries)
}

fn decode_entry(
    index: usize,
    data: RawData,
    rating_field: &str,
) -> Result<LeaderboardEntry, LeaderboardError> {
    let score = data
        .fields
        .get(rating_field)
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            LeaderboardError::decode(format!(
                "Record {index} has no integer '{rating_field}' field"
            ))
        })?;

    let RawUser {
        id,
        first_name,
        display_name,
    } = data.user_data;

    let user_id = UserId::from(id);
    let display_name = display_name
        .filter(|name| !name.trim().is_empty())
        .or(first_name)
        .unwrap_or_else(|| user_id.to_string());

    Ok(LeaderboardEntry {
        user_id,
        display_name,
        score,
    })
}
