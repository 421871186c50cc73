use crate::stats::Stat;

/// A leaderboard published with every report
///
/// `table` is the name the export step writes it under.
#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    pub table: &'static str,
    pub caption: &'static str,
    pub stat: Stat,
    pub columns: &'static [Stat],
}

impl LeaderboardConfig {
    pub const fn new(
        table: &'static str,
        caption: &'static str,
        stat: Stat,
        columns: &'static [Stat],
    ) -> Self {
        Self {
            table,
            caption,
            stat,
            columns,
        }
    }
}

/// Standard season leaderboards, offense first
pub fn get_leaderboards() -> Vec<LeaderboardConfig> {
    vec![
        LeaderboardConfig::new("PTS", "Points Per Game", Stat::Points, &[Stat::Points, Stat::FieldGoalPct]),
        LeaderboardConfig::new("AST", "Assists Per Game", Stat::Assists, &[Stat::Assists]),
        LeaderboardConfig::new("TPG", "3 Pointers Per Game", Stat::ThreesPerGame, &[Stat::ThreesPerGame, Stat::ThreePointPct]),
        LeaderboardConfig::new("FGP", "Field Goal Percentage", Stat::FieldGoalPct, &[Stat::FieldGoalPct, Stat::FieldGoalsMade]),
        LeaderboardConfig::new("TPP", "3 Point Percentage", Stat::ThreePointPct, &[Stat::ThreePointPct, Stat::ThreesMade]),
        LeaderboardConfig::new("REB", "Rebounds Per Game", Stat::Rebounds, &[Stat::Rebounds]),
        LeaderboardConfig::new("BLK", "Blocks Per Game", Stat::Blocks, &[Stat::Blocks]),
        LeaderboardConfig::new("STL", "Steals Per Game", Stat::Steals, &[Stat::Steals]),
    ]
}

/// Default extra columns when only a stat is requested
pub fn default_columns(stat: Stat) -> Vec<Stat> {
    get_leaderboards()
        .into_iter()
        .find(|b| b.stat == stat)
        .map(|b| b.columns.to_vec())
        .unwrap_or_else(|| vec![stat])
}
