use anyhow::Result;

use hoops_ledger::cli::{Cli, Command};
use hoops_ledger::{
    handle_completions, handle_export, handle_highs, handle_import, handle_leaders, handle_serve,
    handle_standings, handle_summary, handle_teams, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Summary { team } => handle_summary(cli, team.as_deref()),
        Command::Leaders { stat, min_games, top, columns } => {
            handle_leaders(cli, *stat, *min_games, *top, columns)
        }
        Command::Standings { groups } => handle_standings(cli, *groups),
        Command::Highs { team } => handle_highs(cli, team.as_deref()),
        Command::Teams => handle_teams(cli),
        Command::Export { min_games } => handle_export(cli, *min_games),
        Command::Import => handle_import(cli),
        Command::Serve { port } => handle_serve(cli, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
