//! Rank-change classification between two consecutive snapshots.

use super::types::{NotificationEvent, Snapshot, UserId};

/// Number of leading ranks that make up the top tier.
pub const DEFAULT_TOP_TIER: usize = 3;

/// Classifies the transition `previous -> current` for `observed` using the
/// default top tier.
pub fn classify(
    previous: &Snapshot,
    current: &Snapshot,
    observed: Option<&UserId>,
) -> NotificationEvent {
    classify_with_top_tier(previous, current, observed, DEFAULT_TOP_TIER)
}

/// A change of leader always wins over the observer's own movement. The
/// observer only counts as dropped when ranked in both snapshots: inside
/// the top tier before, outside it now.
pub fn classify_with_top_tier(
    previous: &Snapshot,
    current: &Snapshot,
    observed: Option<&UserId>,
    top_tier: usize,
) -> NotificationEvent {
    let (Some(previous_leader), Some(current_leader)) = (previous.leader(), current.leader())
    else {
        return NotificationEvent::None;
    };

    if previous_leader.user_id != current_leader.user_id {
        return NotificationEvent::NewLeader {
            entry: current_leader.clone(),
        };
    }

    let Some(user_id) = observed else {
        return NotificationEvent::None;
    };

    match (previous.position_of(user_id), current.position_of(user_id)) {
        (Some(old_index), Some(new_index)) if old_index < top_tier && new_index >= top_tier => {
            NotificationEvent::DroppedFromTop {
                new_rank: new_index + 1,
            }
        }
        _ => NotificationEvent::None,
    }
}
