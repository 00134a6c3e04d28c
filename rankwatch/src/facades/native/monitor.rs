/// Native Rust facade for leaderboard watching
/// Wires the default native adapters around a `LeaderboardWatcher`
use crate::adapters::{native::Notifier, SharedSession};
use crate::config::WatchConfig;
use crate::domain::leaderboard::{LeaderboardError, NotificationEvent, Snapshot, UserId};
use crate::domain::notification::{NotificationGateway, PermissionState};
use crate::platform::Platform;
use crate::ports::{NotifierPort, SnapshotSourcePort};
use crate::watch::LeaderboardWatcher;
use std::rc::Rc;
use std::sync::Arc;

pub struct LeaderboardMonitor {
    session: Arc<SharedSession>,
    watcher: LeaderboardWatcher,
}

impl LeaderboardMonitor {
    /// Create a monitor with the native notifier; its permission prompt
    /// answers according to `config.auto_grant_notifications`
    pub fn new(
        config: WatchConfig,
        source: Rc<dyn SnapshotSourcePort>,
    ) -> Result<Self, LeaderboardError> {
        let notifier = Arc::new(Notifier::with_auto_grant(config.auto_grant_notifications));
        Self::with_notifier(config, source, notifier)
    }

    pub fn with_notifier(
        config: WatchConfig,
        source: Rc<dyn SnapshotSourcePort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Result<Self, LeaderboardError> {
        let platform = Platform::new();
        let session = Arc::new(SharedSession::new());
        let gateway = Rc::new(NotificationGateway::new(platform, notifier));
        let watcher = LeaderboardWatcher::new(platform, config, source, session.clone(), gateway)?;

        Ok(Self { session, watcher })
    }

    /// Start polling; needs a running `LocalSet`
    pub fn start(&self) -> Result<(), LeaderboardError> {
        self.watcher.start()
    }

    pub fn stop(&self) {
        self.watcher.stop();
    }

    pub fn is_running(&self) -> bool {
        self.watcher.is_running()
    }

    /// Fetch once immediately, outside the polling schedule
    pub async fn refresh(&self) -> Result<NotificationEvent, LeaderboardError> {
        self.watcher.refresh().await
    }

    /// Set the user whose top-tier membership is tracked
    pub fn sign_in(&self, user_id: impl Into<UserId>) {
        self.session.set_user(Some(user_id.into()));
    }

    pub fn sign_out(&self) {
        self.session.set_user(None);
    }

    pub fn permission_state(&self) -> PermissionState {
        self.watcher.gateway().permission_state()
    }

    pub async fn request_permission(&self) -> PermissionState {
        self.watcher.gateway().request_permission().await
    }

    pub fn should_offer_prompt(&self) -> bool {
        self.watcher.gateway().should_offer_prompt()
    }

    pub fn current(&self) -> Option<Snapshot> {
        self.watcher.current()
    }

    pub fn previous(&self) -> Option<Snapshot> {
        self.watcher.previous()
    }

    pub fn config(&self) -> &WatchConfig {
        self.watcher.config()
    }
}
