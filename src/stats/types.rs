use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::BoxScoreLine;

/// Season statistics that a summary row can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Stat {
    #[value(name = "gp")]
    #[serde(rename = "GP")]
    GamesPlayed,
    #[value(name = "fgm")]
    #[serde(rename = "FGM")]
    FieldGoalsMade,
    #[value(name = "fga")]
    #[serde(rename = "FGA")]
    FieldGoalsAttempted,
    #[value(name = "fg-pct", alias = "fgp")]
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[value(name = "3pm", alias = "tpm")]
    #[serde(rename = "3PM")]
    ThreesMade,
    #[value(name = "3pa", alias = "tpa")]
    #[serde(rename = "3PA")]
    ThreesAttempted,
    #[value(name = "3pg", alias = "tpg")]
    #[serde(rename = "3PG")]
    ThreesPerGame,
    #[value(name = "3p-pct", alias = "tpp")]
    #[serde(rename = "3P%")]
    ThreePointPct,
    #[value(name = "trb", alias = "reb")]
    #[serde(rename = "TRB")]
    Rebounds,
    #[value(name = "ast")]
    #[serde(rename = "AST")]
    Assists,
    #[value(name = "stl")]
    #[serde(rename = "STL")]
    Steals,
    #[value(name = "blk")]
    #[serde(rename = "BLK")]
    Blocks,
    #[value(name = "tov", alias = "to")]
    #[serde(rename = "TOV")]
    Turnovers,
    #[value(name = "pts")]
    #[serde(rename = "PTS")]
    Points,
}

impl Stat {
    /// Column header used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Stat::GamesPlayed => "GP",
            Stat::FieldGoalsMade => "FGM",
            Stat::FieldGoalsAttempted => "FGA",
            Stat::FieldGoalPct => "FG%",
            Stat::ThreesMade => "3PM",
            Stat::ThreesAttempted => "3PA",
            Stat::ThreesPerGame => "3PG",
            Stat::ThreePointPct => "3P%",
            Stat::Rebounds => "TRB",
            Stat::Assists => "AST",
            Stat::Steals => "STL",
            Stat::Blocks => "BLK",
            Stat::Turnovers => "TOV",
            Stat::Points => "PTS",
        }
    }

    /// Case-insensitive lookup by CLI name or alias (`pts`, `3pg`, `fg-pct`, ...)
    pub fn parse(name: &str) -> Option<Self> {
        <Stat as ValueEnum>::from_str(name, true).ok()
    }

    pub fn value(&self, summary: &PlayerSeasonSummary) -> f64 {
        match self {
            Stat::GamesPlayed => summary.games_played as f64,
            Stat::FieldGoalsMade => summary.fgm as f64,
            Stat::FieldGoalsAttempted => summary.fga as f64,
            Stat::FieldGoalPct => summary.fg_pct,
            Stat::ThreesMade => summary.tpm as f64,
            Stat::ThreesAttempted => summary.tpa as f64,
            Stat::ThreesPerGame => summary.tpg,
            Stat::ThreePointPct => summary.tp_pct,
            Stat::Rebounds => summary.trb,
            Stat::Assists => summary.ast,
            Stat::Steals => summary.stl,
            Stat::Blocks => summary.blk,
            Stat::Turnovers => summary.tov,
            Stat::Points => summary.pts,
        }
    }

    /// Whether the value is a whole-number total rather than a rate
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Stat::GamesPlayed
                | Stat::FieldGoalsMade
                | Stat::FieldGoalsAttempted
                | Stat::ThreesMade
                | Stat::ThreesAttempted
        )
    }
}

/// Season line for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonSummary {
    pub player: String,
    pub games_played: u32,
    pub fgm: u32,
    pub fga: u32,
    pub fg_pct: f64,
    pub tpm: u32,
    pub tpa: u32,
    pub tpg: f64,
    pub tp_pct: f64,
    pub trb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub pts: f64,
}

/// Per-game averages for one team (or for its opponents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeasonSummary {
    pub team: String,
    pub games_played: u32,
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: f64,
    pub tpm: f64,
    pub tpa: f64,
    pub tp_pct: f64,
    pub trb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub pts: f64,
}

/// Win/loss record for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_pct: f64,
    pub margin: f64,
}

/// Standings restricted to one roster group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStandings {
    pub group: String,
    pub records: Vec<TeamRecord>,
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderRow {
    pub player: String,
    pub games_played: u32,
    pub values: Vec<f64>,
}

/// Top-N projection of the season summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub stat: Stat,
    pub columns: Vec<Stat>,
    pub rows: Vec<LeaderRow>,
}

/// Single-game statistics tracked in the record book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighStat {
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "3PM")]
    ThreesMade,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "BLK")]
    Blocks,
}

impl HighStat {
    pub const ALL: [HighStat; 6] = [
        HighStat::Points,
        HighStat::ThreesMade,
        HighStat::Rebounds,
        HighStat::Assists,
        HighStat::Steals,
        HighStat::Blocks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HighStat::Points => "PTS",
            HighStat::ThreesMade => "3PM",
            HighStat::Rebounds => "REB",
            HighStat::Assists => "AST",
            HighStat::Steals => "STL",
            HighStat::Blocks => "BLK",
        }
    }

    pub fn value(&self, line: &BoxScoreLine) -> u32 {
        match self {
            HighStat::Points => line.pts,
            HighStat::ThreesMade => line.tpm,
            HighStat::Rebounds => line.reb,
            HighStat::Assists => line.ast,
            HighStat::Steals => line.stl,
            HighStat::Blocks => line.blk,
        }
    }
}

/// Best single-game mark for one stat and everyone who reached it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub stat: HighStat,
    pub value: u32,
    pub holders: Vec<String>,
}

impl RecordEntry {
    pub fn holders_display(&self) -> String {
        self.holders.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBook {
    pub entries: Vec<RecordEntry>,
}

impl RecordBook {
    pub fn get(&self, stat: HighStat) -> Option<&RecordEntry> {
        self.entries.iter().find(|e| e.stat == stat)
    }
}
