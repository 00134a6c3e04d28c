use super::poller::Poller;
use crate::adapters::runtime;
use crate::config::{OverlapPolicy, WatchConfig};
use crate::domain::leaderboard::{
    classify_with_top_tier, render, LeaderboardError, NotificationEvent, Snapshot, SnapshotStore,
};
use crate::domain::notification::NotificationGateway;
use crate::platform::Platform;
use crate::ports::{SessionPort, SnapshotSourcePort};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

struct WatcherInner {
    platform: Platform,
    config: WatchConfig,
    source: Rc<dyn SnapshotSourcePort>,
    session: Arc<dyn SessionPort>,
    gateway: Rc<NotificationGateway>,
    store: RefCell<SnapshotStore>,
    /// Bumped on every start and stop; fetches from an older epoch are dropped.
    epoch: Cell<u64>,
    /// Pending fetch count, tagged with the epoch that issued them.
    in_flight: Cell<(u64, usize)>,
}

impl WatcherInner {
    fn pending_in(&self, epoch: u64) -> usize {
        match self.in_flight.get() {
            (owner, count) if owner == epoch => count,
            _ => 0,
        }
    }

    fn begin_fetch(&self, epoch: u64) {
        let count = self.pending_in(epoch);
        self.in_flight.set((epoch, count + 1));
    }

    fn end_fetch(&self, epoch: u64) {
        let (owner, count) = self.in_flight.get();
        if owner == epoch {
            self.in_flight.set((owner, count.saturating_sub(1)));
        }
    }

    /// Fetches on behalf of `epoch`. `None` when the fetch was skipped by
    /// the overlap policy or resolved after the epoch ended.
    async fn fetch_for(&self, epoch: u64) -> Option<Result<Snapshot, LeaderboardError>> {
        let logger = self.platform.logger();

        if self.config.overlap == OverlapPolicy::SkipWhileInFlight && self.pending_in(epoch) > 0 {
            logger.debug("Leaderboard fetch still pending, skipping");
            return None;
        }

        self.begin_fetch(epoch);
        let started = self.platform.clock().now();
        let result = self.source.fetch().await;
        self.end_fetch(epoch);

        if self.epoch.get() != epoch {
            logger.debug("Discarding leaderboard fetched by a stopped watch");
            return None;
        }

        if let Ok(snapshot) = &result {
            logger.debug(&format!(
                "Leaderboard fetched in {:.0}ms ({} entries)",
                self.platform.clock().elapsed_since(started),
                snapshot.len()
            ));
        }
        Some(result)
    }

    async fn run_tick(&self, epoch: u64) {
        match self.fetch_for(epoch).await {
            Some(Ok(snapshot)) => {
                self.accept(snapshot);
            }
            Some(Err(e)) => self
                .platform
                .logger()
                .warn(&format!("Leaderboard fetch failed: {e}")),
            None => {}
        }
    }

    fn accept(&self, snapshot: Snapshot) -> NotificationEvent {
        let event = {
            let mut store = self.store.borrow_mut();
            if !store.update(snapshot) {
                return NotificationEvent::None;
            }
            let Some((previous, current)) = store.pair() else {
                return NotificationEvent::None;
            };
            let observed = self.session.current_user();
            classify_with_top_tier(previous, current, observed.as_ref(), self.config.top_tier)
        };

        if let Some(message) = render(&event, self.config.top_tier) {
            self.platform
                .logger()
                .log(&format!("Rank event: {}", message.title));
            self.gateway.deliver(&message);
        }
        event
    }
}

/// One leaderboard polling session: poller, source, store, classifier and
/// notification gateway wired together.
pub struct LeaderboardWatcher {
    inner: Rc<WatcherInner>,
    poller: Poller,
}

impl LeaderboardWatcher {
    pub fn new(
        platform: Platform,
        config: WatchConfig,
        source: Rc<dyn SnapshotSourcePort>,
        session: Arc<dyn SessionPort>,
        gateway: Rc<NotificationGateway>,
    ) -> Result<Self, LeaderboardError> {
        config.validate()?;

        Ok(Self {
            inner: Rc::new(WatcherInner {
                platform,
                config,
                source,
                session,
                gateway,
                store: RefCell::new(SnapshotStore::new()),
                epoch: Cell::new(0),
                in_flight: Cell::new((0, 0)),
            }),
            poller: Poller::new(),
        })
    }

    /// Starts polling. Must be called from within a local task context
    /// (a `LocalSet` on native targets).
    pub fn start(&self) -> Result<(), LeaderboardError> {
        let inner = Rc::clone(&self.inner);
        let epoch = inner.epoch.get().wrapping_add(1);
        inner.epoch.set(epoch);

        self.poller.start(self.inner.config.poll_interval(), move || {
            let inner = Rc::clone(&inner);
            runtime::spawn_local(async move {
                inner.run_tick(epoch).await;
            });
        })?;

        self.inner.platform.logger().log(&format!(
            "Leaderboard watch started, polling every {}ms",
            self.inner.config.poll_interval_ms
        ));
        Ok(())
    }

    /// Stops polling. Fetches still in flight are discarded when they
    /// resolve: no store update and no alert happen after this returns.
    pub fn stop(&self) {
        let was_running = self.poller.is_running();
        self.poller.stop();
        self.inner.epoch.set(self.inner.epoch.get().wrapping_add(1));

        if was_running {
            self.inner.platform.logger().log("Leaderboard watch stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.poller.is_running()
    }

    /// Fetches once right away and processes the result.
    ///
    /// Counts as a fetch of the current session: under
    /// `SkipWhileInFlight` it does nothing while one is pending, and its
    /// result is dropped if the watch stops or restarts meanwhile. Both
    /// cases yield `NotificationEvent::None`.
    pub async fn refresh(&self) -> Result<NotificationEvent, LeaderboardError> {
        match self.inner.fetch_for(self.inner.epoch.get()).await {
            Some(result) => Ok(self.inner.accept(result?)),
            None => Ok(NotificationEvent::None),
        }
    }

    /// Feeds a snapshot obtained elsewhere through the store, the
    /// classifier and the gateway.
    pub fn accept(&self, snapshot: Snapshot) -> NotificationEvent {
        self.inner.accept(snapshot)
    }

    /// Forgets both stored generations.
    pub fn reset(&self) {
        self.inner.store.borrow_mut().clear();
    }

    pub fn current(&self) -> Option<Snapshot> {
        self.inner.store.borrow().current().cloned()
    }

    pub fn previous(&self) -> Option<Snapshot> {
        self.inner.store.borrow().previous().cloned()
    }

    pub fn config(&self) -> &WatchConfig {
        &self.inner.config
    }

    pub fn gateway(&self) -> &Rc<NotificationGateway> {
        &self.inner.gateway
    }
}

impl Drop for LeaderboardWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::native::{MockNotifier, ScriptedSnapshotSource};
    use crate::adapters::SharedSession;
    use crate::domain::leaderboard::LeaderboardEntry;
    use crate::domain::notification::PermissionState;

    fn board(entries: &[(&str, i64)]) -> Snapshot {
        Snapshot::new(
            entries
                .iter()
                .map(|(id, score)| LeaderboardEntry::new(*id, id.to_uppercase(), *score))
                .collect(),
        )
        .unwrap()
    }

    fn watcher(notifier: &Arc<MockNotifier>, session: &Arc<SharedSession>) -> LeaderboardWatcher {
        let platform = Platform::new();
        LeaderboardWatcher::new(
            platform,
            WatchConfig::default(),
            Rc::new(ScriptedSnapshotSource::new()),
            session.clone(),
            Rc::new(NotificationGateway::new(platform, notifier.clone())),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let platform = Platform::new();
        let config = WatchConfig {
            top_tier: 0,
            ..WatchConfig::default()
        };
        let result = LeaderboardWatcher::new(
            platform,
            config,
            Rc::new(ScriptedSnapshotSource::new()),
            Arc::new(SharedSession::new()),
            Rc::new(NotificationGateway::new(
                platform,
                Arc::new(MockNotifier::granted()),
            )),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_first_snapshot_never_notifies() {
        let notifier = Arc::new(MockNotifier::granted());
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));

        assert_eq!(watcher.accept(board(&[("a", 10)])), NotificationEvent::None);
        assert!(notifier.alerts().is_empty());
        assert!(watcher.previous().is_none());
    }

    #[test]
    fn test_new_leader_is_delivered() {
        let notifier = Arc::new(MockNotifier::granted());
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));

        watcher.accept(board(&[("a", 100), ("b", 90), ("c", 80)]));
        let event = watcher.accept(board(&[("d", 110), ("a", 100), ("b", 90)]));

        assert!(matches!(event, NotificationEvent::NewLeader { .. }));
        let alerts = notifier.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].body, "Player D with a score of 110");
    }

    #[test]
    fn test_observed_identity_is_read_per_snapshot() {
        let notifier = Arc::new(MockNotifier::granted());
        let session = Arc::new(SharedSession::new());
        let watcher = watcher(&notifier, &session);

        watcher.accept(board(&[("a", 100), ("b", 90), ("c", 80)]));
        session.set_user(Some("b".into()));
        let event = watcher.accept(board(&[("a", 100), ("x", 95), ("y", 94), ("b", 90)]));

        assert_eq!(event, NotificationEvent::DroppedFromTop { new_rank: 4 });
        assert_eq!(notifier.alerts()[0].title, "You are no longer in the top 3");
    }

    #[test]
    fn test_unchanged_snapshot_skips_classification() {
        let notifier = Arc::new(MockNotifier::granted());
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));

        watcher.accept(board(&[("a", 100)]));
        assert_eq!(watcher.accept(board(&[("a", 100)])), NotificationEvent::None);
        assert_eq!(watcher.previous(), watcher.current());
    }

    #[test]
    fn test_event_without_permission_is_silent() {
        let notifier = Arc::new(MockNotifier::new(PermissionState::Default));
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));

        watcher.accept(board(&[("a", 100)]));
        let event = watcher.accept(board(&[("b", 200), ("a", 100)]));

        assert!(matches!(event, NotificationEvent::NewLeader { .. }));
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_reset_forgets_history() {
        let notifier = Arc::new(MockNotifier::granted());
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));

        watcher.accept(board(&[("a", 100)]));
        watcher.reset();

        assert_eq!(watcher.accept(board(&[("b", 200)])), NotificationEvent::None);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_stop_without_start() {
        let notifier = Arc::new(MockNotifier::granted());
        let watcher = watcher(&notifier, &Arc::new(SharedSession::new()));
        watcher.stop();
        watcher.stop();
        assert!(!watcher.is_running());
    }
}
