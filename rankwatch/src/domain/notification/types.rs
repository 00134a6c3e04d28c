use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform authorisation for user-facing alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    #[default]
    Default,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
            PermissionState::Default => "default",
        }
    }

    /// `Granted` and `Denied` are never left once reached.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PermissionState::Default)
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(PermissionState::Granted),
            "denied" => Ok(PermissionState::Denied),
            "default" => Ok(PermissionState::Default),
            other => Err(format!("Unknown permission state: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_state_parse() {
        assert_eq!("granted".parse(), Ok(PermissionState::Granted));
        assert_eq!("denied".parse(), Ok(PermissionState::Denied));
        assert_eq!("default".parse(), Ok(PermissionState::Default));
        assert!("prompt".parse::<PermissionState>().is_err());
    }

    #[test]
    fn test_permission_state_terminal() {
        assert!(PermissionState::Granted.is_terminal());
        assert!(PermissionState::Denied.is_terminal());
        assert!(!PermissionState::Default.is_terminal());
    }

    #[test]
    fn test_permission_state_display_matches_parse() {
        for state in [
            PermissionState::Granted,
            PermissionState::Denied,
            PermissionState::Default,
        ] {
            assert_eq!(state.to_string().parse(), Ok(state));
        }
    }
}
