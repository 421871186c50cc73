pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;
pub mod sources;
pub mod stats;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use log::warn;
use std::sync::Arc;

use crate::cache::Cache;
use crate::cli::{Cli, SourceKind};
use crate::config::default_columns;
use crate::config::settings::AppConfig;
use crate::domain::ToTable;
use crate::output::Format;
use crate::services::export::ExportService;
use crate::services::import::ImportService;
use crate::services::report::ReportService;
use crate::services::server::ServerService;
use crate::sources::{DirectorySource, SeasonSource, SqliteSource};
use crate::stats::Stat;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment-derived settings with command-line overrides applied
pub fn load_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }
    config
}

pub fn open_source(kind: SourceKind, config: &AppConfig) -> Result<Arc<dyn SeasonSource>> {
    Ok(match kind {
        SourceKind::Dir => Arc::new(DirectorySource::new(&config.storage.data_dir)),
        SourceKind::Sqlite => Arc::new(SqliteSource::open(&config.storage.database_path)?),
    })
}

pub fn open_reports(cli: &Cli, config: &AppConfig) -> Result<ReportService> {
    let source = open_source(cli.source, config)?;
    // A broken cache directory only costs recomputation
    let cache = match Cache::new(&config.storage.cache_dir) {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!("Report cache disabled: {:#}", e);
            None
        }
    };
    Ok(ReportService::new(source, cache))
}

pub fn handle_summary(cli: &Cli, team: Option<&str>) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let table = match team {
        Some(team) => reports.team_report(cli.season, team)?.players.to_table(),
        None => reports.season_report(cli.season)?.players.to_table(),
    };
    output::print(&table, cli.format)
}

pub fn handle_leaders(
    cli: &Cli,
    stat: Stat,
    min_games: Option<u32>,
    top: Option<usize>,
    columns: &[Stat],
) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let report = reports.season_report(cli.season)?;

    let columns = if columns.is_empty() { default_columns(stat) } else { columns.to_vec() };
    let leaderboard = report.leaders(
        stat,
        min_games.unwrap_or(config.leaders.min_games),
        &columns,
        top.unwrap_or(config.leaders.top_n),
    );
    output::print(&leaderboard.to_table(), cli.format)
}

pub fn handle_standings(cli: &Cli, groups: bool) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let report = reports.season_report(cli.season)?;

    if !groups {
        return output::print(&report.standings.to_table(), cli.format);
    }
    if cli.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&report.groups)?);
        return Ok(());
    }
    for (i, group) in report.groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if cli.format == Format::Table {
            println!("{}", format!("Group {}", group.group).bold());
        }
        output::print(&group.records.to_table(), cli.format)?;
    }
    Ok(())
}

pub fn handle_highs(cli: &Cli, team: Option<&str>) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let highs = match team {
        Some(team) => reports.team_report(cli.season, team)?.highs,
        None => reports.season_report(cli.season)?.highs,
    };
    output::print(&highs.to_table(), cli.format)
}

pub fn handle_teams(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let report = reports.season_report(cli.season)?;

    let sections = [
        ("Team", &report.team_totals),
        ("Opponent", &report.opponent_totals),
        ("Differential", &report.differential),
    ];
    for (i, (title, rows)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if cli.format == Format::Table {
            println!("{}", title.bold());
        }
        output::print(&rows.to_table(), cli.format)?;
    }
    Ok(())
}

pub fn handle_export(cli: &Cli, min_games: Option<u32>) -> Result<()> {
    let config = load_config(cli);
    let reports = open_reports(cli, &config)?;
    let service = ExportService::new(&config, &reports);
    service.run(cli.season, min_games.unwrap_or(config.leaders.min_games))
}

pub fn handle_import(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    let from = DirectorySource::new(&config.storage.data_dir);
    let into = SqliteSource::open(&config.storage.database_path)?;
    ImportService::new(&from, &into).run(cli.season)
}

pub fn handle_serve(cli: &Cli, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = load_config(cli);
        let reports = open_reports(cli, &config)?;
        let service = ServerService::new(port, config, reports);
        service.run().await
    })
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
