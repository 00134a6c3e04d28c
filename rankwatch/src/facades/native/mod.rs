pub mod monitor;

pub use monitor::LeaderboardMonitor;
