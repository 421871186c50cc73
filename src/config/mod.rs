pub mod leaderboards;
pub mod settings;

pub use leaderboards::{default_columns, get_leaderboards, LeaderboardConfig};
pub use settings::AppConfig;
