use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::Cache;
use crate::domain::SeasonData;
use crate::sources::SeasonSource;
use crate::stats::{
    self, GroupStandings, Leaderboard, PlayerSeasonSummary, RecordBook, Stat, TeamRecord,
    TeamSeasonSummary,
};

/// Everything computed for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    pub season: u32,
    pub last_updated: Option<DateTime<Utc>>,
    pub players: Vec<PlayerSeasonSummary>,
    pub standings: Vec<TeamRecord>,
    pub groups: Vec<GroupStandings>,
    pub highs: RecordBook,
    pub team_totals: Vec<TeamSeasonSummary>,
    pub opponent_totals: Vec<TeamSeasonSummary>,
    pub differential: Vec<TeamSeasonSummary>,
}

impl SeasonReport {
    pub fn build(season: u32, data: &SeasonData, last_updated: Option<DateTime<Utc>>) -> Self {
        let lines = data.lines(None);
        let standings = stats::compute_standings(&data.team_names(), &data.results);
        let team_totals = stats::team_totals(&data.box_scores, &data.roster);
        let opponent_totals = stats::opponent_totals(&data.box_scores, &data.roster);

        Self {
            season,
            last_updated,
            players: stats::aggregate(&lines),
            groups: stats::group_standings(&standings, &data.roster),
            standings,
            highs: stats::compute_highs(&lines),
            differential: stats::differential(&team_totals, &opponent_totals),
            team_totals,
            opponent_totals,
        }
    }

    pub fn leaders(&self, stat: Stat, minimum_games: u32, columns: &[Stat], top_n: usize) -> Leaderboard {
        stats::project_leaders(&self.players, stat, minimum_games, columns, top_n)
    }
}

/// One team's slice of a season: its players and its single-game highs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport {
    pub season: u32,
    pub team: String,
    pub players: Vec<PlayerSeasonSummary>,
    pub highs: RecordBook,
}

impl TeamReport {
    pub fn build(season: u32, team: &str, data: &SeasonData) -> Self {
        let lines = data.lines(Some(team));
        Self {
            season,
            team: team.to_string(),
            players: stats::aggregate(&lines),
            highs: stats::compute_highs(&lines),
        }
    }
}

/// Builds reports from a source, memoized in an optional cache
pub struct ReportService {
    source: Arc<dyn SeasonSource>,
    cache: Option<Cache>,
}

impl ReportService {
    pub fn new(source: Arc<dyn SeasonSource>, cache: Option<Cache>) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &dyn SeasonSource {
        self.source.as_ref()
    }

    pub fn season_report(&self, season: u32) -> Result<SeasonReport> {
        let last_updated = self.source.last_modified(season)?;
        let key = format!("{}#s{}", self.source.describe(), season);
        let fingerprint = fingerprint(last_updated);

        if let Some(cache) = &self.cache {
            if let Some(report) = cache.load::<SeasonReport>(&key, &fingerprint)? {
                info!("Using cached report for season {}", season);
                return Ok(report);
            }
        }

        info!("Building report for season {} from {}", season, self.source.describe());
        let data = self.source.load(season)?;
        let report = SeasonReport::build(season, &data, last_updated);

        if let Some(cache) = &self.cache {
            // Memoization only; a failed save still serves the report
            if let Err(e) = cache.save(&key, &fingerprint, &report) {
                warn!("Could not cache report for season {}: {:#}", season, e);
            }
        }
        Ok(report)
    }

    pub fn team_report(&self, season: u32, team: &str) -> Result<TeamReport> {
        let data = self.source.load(season)?;
        Ok(TeamReport::build(season, team, &data))
    }
}

fn fingerprint(last_updated: Option<DateTime<Utc>>) -> String {
    match last_updated {
        Some(time) => time.to_rfc3339(),
        None => "none".to_string(),
    }
}
