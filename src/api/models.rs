use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stats::{Leaderboard, TeamSeasonSummary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonOverview {
    pub season: u32,
    pub last_updated: Option<DateTime<Utc>>,
    pub players: usize,
    pub teams: usize,
    pub games: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadersResponse {
    pub caption: Option<String>,
    pub min_games: u32,
    pub leaderboard: Leaderboard,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTablesResponse {
    pub totals: Vec<TeamSeasonSummary>,
    pub opponents: Vec<TeamSeasonSummary>,
    pub differential: Vec<TeamSeasonSummary>,
}
