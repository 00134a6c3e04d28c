pub mod poller;
pub mod watcher;

pub use poller::Poller;
pub use watcher::LeaderboardWatcher;
