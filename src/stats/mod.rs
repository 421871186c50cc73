pub mod aggregate;
pub mod highs;
pub mod leaders;
pub mod records;
mod tables;
pub mod teams;
pub mod types;

pub use aggregate::aggregate;
pub use highs::compute_highs;
pub use leaders::{project_leaders, DEFAULT_TOP_N};
pub use records::{compute_record, compute_standings, group_standings};
pub use teams::{differential, opponent_totals, team_totals};
pub use types::{
    GroupStandings, HighStat, LeaderRow, Leaderboard, PlayerSeasonSummary, RecordBook,
    RecordEntry, Stat, TeamRecord, TeamSeasonSummary,
};
