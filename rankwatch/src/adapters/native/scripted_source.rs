use super::runtime;
use crate::domain::leaderboard::{LeaderboardError, Snapshot};
use crate::ports::SnapshotSourcePort;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

struct Step {
    result: Result<Snapshot, LeaderboardError>,
    delay: Duration,
}

/// Snapshot source replaying queued results.
///
/// Each fetch consumes one queued step, optionally after a delay. Once the
/// queue runs dry the last result is served again, like a board nobody
/// plays on.
#[derive(Default)]
pub struct ScriptedSnapshotSource {
    steps: RefCell<VecDeque<Step>>,
    last: RefCell<Option<Result<Snapshot, LeaderboardError>>>,
    fetches: Cell<usize>,
}

impl ScriptedSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: Result<Snapshot, LeaderboardError>) {
        self.push_delayed(result, Duration::ZERO);
    }

    pub fn push_delayed(&self, result: Result<Snapshot, LeaderboardError>, delay: Duration) {
        self.steps.borrow_mut().push_back(Step { result, delay });
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn pending_steps(&self) -> usize {
        self.steps.borrow().len()
    }
}

#[async_trait(?Send)]
impl SnapshotSourcePort for ScriptedSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, LeaderboardError> {
        self.fetches.set(self.fetches.get() + 1);

        let step = self.steps.borrow_mut().pop_front();
        let Some(Step { result, delay }) = step else {
            return self
                .last
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(LeaderboardError::source_unavailable("script exhausted")));
        };

        *self.last.borrow_mut() = Some(result.clone());

        if !delay.is_zero() {
            runtime::sleep(delay).await;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leaderboard::LeaderboardEntry;
    use futures::executor::block_on;

    fn snapshot(leader: &str) -> Snapshot {
        Snapshot::new(vec![LeaderboardEntry::new(leader, leader, 1)]).unwrap()
    }

    #[test]
    fn test_scripted_source_replays_in_order() {
        let source = ScriptedSnapshotSource::new();
        source.push(Ok(snapshot("a")));
        source.push(Err(LeaderboardError::source_unavailable("offline")));

        assert_eq!(block_on(source.fetch()), Ok(snapshot("a")));
        assert!(block_on(source.fetch()).is_err());
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn test_scripted_source_repeats_last_result() {
        let source = ScriptedSnapshotSource::new();
        source.push(Ok(snapshot("a")));

        block_on(source.fetch()).unwrap();

        assert_eq!(block_on(source.fetch()), Ok(snapshot("a")));
        assert_eq!(source.pending_steps(), 0);
    }

    #[test]
    fn test_scripted_source_empty_script() {
        let source = ScriptedSnapshotSource::new();
        assert_eq!(
            block_on(source.fetch()),
            Err(LeaderboardError::source_unavailable("script exhausted"))
        );
    }
}
