pub mod directory;
pub mod sqlite;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::domain::{BoxScore, GameResult, RosterEntry, SeasonData};

pub use directory::DirectorySource;
pub use sqlite::SqliteSource;

/// Where season rows come from
pub trait SeasonSource: Send + Sync {
    /// Identity used in cache keys and logs
    fn describe(&self) -> String;

    fn box_scores(&self, season: u32) -> Result<Vec<BoxScore>>;

    fn game_results(&self, season: u32) -> Result<Vec<GameResult>>;

    fn roster(&self, season: u32) -> Result<Vec<RosterEntry>>;

    /// Newest modification time of the season's data, if known
    fn last_modified(&self, season: u32) -> Result<Option<DateTime<Utc>>>;

    fn load(&self, season: u32) -> Result<SeasonData> {
        Ok(SeasonData {
            box_scores: self.box_scores(season)?,
            results: self.game_results(season)?,
            roster: self.roster(season)?,
        })
    }
}
