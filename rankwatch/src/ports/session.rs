use crate::domain::leaderboard::UserId;

/// Source of the observed identity.
pub trait SessionPort: Send + Sync {
    /// The signed-in user, or `None` when nobody is authenticated.
    fn current_user(&self) -> Option<UserId>;
}
