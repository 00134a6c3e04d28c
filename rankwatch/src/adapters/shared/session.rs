use crate::domain::leaderboard::UserId;
use crate::ports::SessionPort;
use parking_lot::RwLock;

/// In-memory observed identity, updated by whoever owns sign-in state.
#[derive(Debug, Default)]
pub struct SharedSession {
    user: RwLock<Option<UserId>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self {
            user: RwLock::new(Some(user.into())),
        }
    }

    pub fn set_user(&self, user: Option<UserId>) {
        *self.user.write() = user;
    }
}

impl SessionPort for SharedSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_signed_out() {
        assert!(SharedSession::new().current_user().is_none());
    }

    #[test]
    fn test_session_sign_in_and_out() {
        let session = SharedSession::new();

        session.set_user(Some("42".into()));
        assert_eq!(session.current_user(), Some(UserId::from(42u64)));

        session.set_user(None);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_session_signed_in_constructor() {
        let session = SharedSession::signed_in("alice");
        assert_eq!(session.current_user(), Some("alice".into()));
    }
}
