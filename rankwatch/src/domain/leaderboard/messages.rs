use super::types::NotificationEvent;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub title: String,
    pub body: String,
}

/// Renders the user-facing alert for `event`; `None` events render nothing.
pub fn render(event: &NotificationEvent, top_tier: usize) -> Option<NotificationMessage> {
    match event {
        NotificationEvent::NewLeader { entry } => Some(NotificationMessage {
            title: "A new leader has appeared".to_string(),
            body: format!(
                "Player {} with a score of {}",
                entry.display_name, entry.score
            ),
        }),
        NotificationEvent::DroppedFromTop { new_rank } => Some(NotificationMessage {
            title: format!("You are no longer in the top {top_tier}"),
            body: format!("Your current rank is {new_rank}"),
        }),
        NotificationEvent::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leaderboard::types::LeaderboardEntry;

    #[test]
    fn test_render_new_leader() {
        let event = NotificationEvent::NewLeader {
            entry: LeaderboardEntry::new("7", "Alice", 1200),
        };
        let message = render(&event, 3).unwrap();

        assert_eq!(message.title, "A new leader has appeared");
        assert_eq!(message.body, "Player Alice with a score of 1200");
    }

    #[test]
    fn test_render_dropped_from_top() {
        let message = render(&NotificationEvent::DroppedFromTop { new_rank: 4 }, 3).unwrap();

        assert_eq!(message.title, "You are no longer in the top 3");
        assert_eq!(message.body, "Your current rank is 4");
    }

    #[test]
    fn test_render_none() {
        assert!(render(&NotificationEvent::None, 3).is_none());
    }
}
