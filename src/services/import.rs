use anyhow::Result;
use log::info;

use crate::database::{self, source_tables};
use crate::sources::{SeasonSource, SqliteSource};

/// Copies one season from any source into the SQLite source tables
pub struct ImportService<'a> {
    from: &'a dyn SeasonSource,
    into: &'a SqliteSource,
}

impl<'a> ImportService<'a> {
    pub fn new(from: &'a dyn SeasonSource, into: &'a SqliteSource) -> Self {
        Self { from, into }
    }

    pub fn run(&self, season: u32) -> Result<()> {
        info!("=== Starting Import ===\n");

        // Step 1: Read the season
        info!("Step 1: Reading season {} from {}...", season, self.from.describe());
        let data = self.from.load(season)?;
        info!(
            "  → {} box scores, {} results, {} teams\n",
            data.box_scores.len(),
            data.results.len(),
            data.roster.len()
        );

        // Step 2: Replace the season's rows
        info!("Step 2: Writing to {}...", self.into.describe());
        let mut conn = database::get_connection(self.into.pool())?;
        let tx = conn.transaction()?;
        source_tables::clear_season(&tx, season)?;
        for box_score in &data.box_scores {
            source_tables::insert_box_score(&tx, season, box_score)?;
        }
        for result in &data.results {
            source_tables::insert_game_result(&tx, season, result)?;
        }
        for entry in &data.roster {
            source_tables::insert_roster_entry(&tx, season, entry)?;
        }
        tx.commit()?;

        info!("=== Import Complete ===");
        Ok(())
    }
}
