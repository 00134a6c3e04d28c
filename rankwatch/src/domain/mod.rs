pub mod leaderboard;
pub mod notification;
