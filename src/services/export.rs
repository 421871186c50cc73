use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::{get_leaderboards, AppConfig};
use crate::database::{self, tables, DbConn};
use crate::domain::{Table, ToTable};
use crate::services::report::{ReportService, SeasonReport};

/// Publishes every season table to a SQLite database
pub struct ExportService<'a> {
    config: &'a AppConfig,
    reports: &'a ReportService,
}

impl<'a> ExportService<'a> {
    pub fn new(config: &'a AppConfig, reports: &'a ReportService) -> Self {
        Self { config, reports }
    }

    pub fn run(&self, season: u32, min_games: u32) -> Result<()> {
        let db_path = self.config.storage.export_path.clone();
        let temp_db_path = temp_path(&db_path);

        info!("=== Starting Export (Atomic) ===\n");
        info!("Target DB: {}, Temp DB: {}", db_path.display(), temp_db_path.display());

        // Tables this export does not write survive the swap
        if temp_db_path.exists() {
            std::fs::remove_file(&temp_db_path)?;
        }
        if db_path.exists() {
            std::fs::copy(&db_path, &temp_db_path)?;
        }

        let report = self.reports.season_report(season)?;
        info!("  → Built report with {} players\n", report.players.len());

        self.export_to_db(&temp_db_path, &report, min_games)?;

        // Atomic swap
        std::fs::rename(&temp_db_path, &db_path)?;
        info!("Successfully swapped database to {}", db_path.display());

        info!("=== Export Complete ===");
        Ok(())
    }

    fn export_to_db(&self, db_path: &Path, report: &SeasonReport, min_games: u32) -> Result<()> {
        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;

        let named = season_tables(report, min_games, self.config.leaders.top_n);
        for (name, table) in &named {
            self.write(&mut conn, name, table)?;
        }

        info!("  → Wrote {} tables\n", named.len());
        Ok(())
    }

    fn write(&self, conn: &mut DbConn, name: &str, table: &Table) -> Result<()> {
        tables::write_table(conn, name, table)?;
        info!("    → {} ({} rows)", name, table.len());
        Ok(())
    }
}

/// Every published table of a report, by table name
pub fn season_tables(report: &SeasonReport, min_games: u32, top_n: usize) -> Vec<(String, Table)> {
    let mut named = vec![
        ("Players".to_string(), report.players.to_table()),
        ("Standings".to_string(), report.standings.to_table()),
    ];

    for board in get_leaderboards() {
        let leaders = report.leaders(board.stat, min_games, board.columns, top_n);
        named.push((board.table.to_string(), leaders.to_table()));
    }

    named.push(("Highs".to_string(), report.highs.to_table()));
    named.push(("Team".to_string(), report.team_totals.to_table()));
    named.push(("Opponent".to_string(), report.opponent_totals.to_table()));
    named.push(("Differential".to_string(), report.differential.to_table()));
    named
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
