use crate::domain::leaderboard::{LeaderboardError, LeaderboardRequest, DEFAULT_TOP_TIER};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_RATING_FIELD: &str = "codeHuntersMemoryGameScore";
pub const DEFAULT_LIMIT: u32 = 10;
/// Longest interval browser timers accept.
pub const MAX_POLL_INTERVAL_MS: u64 = u32::MAX as u64;

pub const ENV_POLL_INTERVAL_MS: &str = "RANKWATCH_POLL_INTERVAL_MS";
pub const ENV_TOP_TIER: &str = "RANKWATCH_TOP_TIER";
pub const ENV_OVERLAP: &str = "RANKWATCH_OVERLAP";
pub const ENV_ENDPOINT: &str = "RANKWATCH_ENDPOINT";
pub const ENV_RATING_FIELD: &str = "RANKWATCH_RATING_FIELD";
pub const ENV_LIMIT: &str = "RANKWATCH_LIMIT";
pub const ENV_AUTO_GRANT: &str = "RANKWATCH_AUTO_GRANT";

/// What a tick does while an earlier fetch is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlapPolicy {
    /// Fire anyway; whichever fetch resolves last wins.
    #[default]
    Allow,
    /// Skip the tick.
    SkipWhileInFlight,
}

impl FromStr for OverlapPolicy {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "allow" => Ok(OverlapPolicy::Allow),
            "skipWhileInFlight" | "skip-while-in-flight" | "skip" => {
                Ok(OverlapPolicy::SkipWhileInFlight)
            }
            other => Err(LeaderboardError::invalid_config(format!(
                "unknown overlap policy '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
    pub top_tier: usize,
    pub overlap: OverlapPolicy,
    pub endpoint: Option<String>,
    pub rating_field_name: String,
    pub limit: u32,
    /// Answer of the native notifier's permission prompt.
    pub auto_grant_notifications: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            top_tier: DEFAULT_TOP_TIER,
            overlap: OverlapPolicy::Allow,
            endpoint: None,
            rating_field_name: DEFAULT_RATING_FIELD.to_string(),
            limit: DEFAULT_LIMIT,
            auto_grant_notifications: false,
        }
    }
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn leaderboard_request(&self) -> LeaderboardRequest {
        LeaderboardRequest::new(self.rating_field_name.clone(), self.limit)
    }

    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if self.poll_interval_ms == 0 {
            return Err(LeaderboardError::invalid_config(
                "poll interval must be greater than zero",
            ));
        }
        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(LeaderboardError::invalid_config(format!(
                "poll interval cannot exceed {MAX_POLL_INTERVAL_MS}ms"
            )));
        }
        if self.top_tier == 0 {
            return Err(LeaderboardError::invalid_config(
                "top tier must hold at least one rank",
            ));
        }
        if self.limit == 0 {
            return Err(LeaderboardError::invalid_config(
                "limit must be greater than zero",
            ));
        }
        if self.rating_field_name.trim().is_empty() {
            return Err(LeaderboardError::invalid_config(
                "rating field name cannot be empty",
            ));
        }
        Ok(())
    }

    /// Builds a config from `RANKWATCH_*` variables, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, LeaderboardError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `RANKWATCH_*` keys resolved by `lookup`; unset
    /// keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LeaderboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(interval) = parse_var(&lookup, ENV_POLL_INTERVAL_MS)? {
            config.poll_interval_ms = interval;
        }
        if let Some(top_tier) = parse_var(&lookup, ENV_TOP_TIER)? {
            config.top_tier = top_tier;
        }
        if let Some(overlap) = lookup(ENV_OVERLAP) {
            config.overlap = overlap.parse()?;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            config.endpoint = Some(endpoint);
        }
        if let Some(field) = lookup(ENV_RATING_FIELD) {
            config.rating_field_name = field;
        }
        if let Some(limit) = parse_var(&lookup, ENV_LIMIT)? {
            config.limit = limit;
        }
        if let Some(auto_grant) = parse_var(&lookup, ENV_AUTO_GRANT)? {
            config.auto_grant_notifications = auto_grant;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, LeaderboardError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                LeaderboardError::invalid_config(format!("{key}='{raw}': {e}"))
            })
        })
        .transpose()
}
