use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::Format;
use crate::stats::Stat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Basketball league season statistics")]
pub struct Cli {
    /// Root of the season CSV tree (overrides DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Season number
    #[arg(short, long, global = true, default_value_t = 1)]
    pub season: u32,

    /// Where season rows are read from
    #[arg(long, global = true, value_enum, default_value_t = SourceKind::Dir)]
    pub source: SourceKind,

    /// Output format for reports
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// CSV directory tree
    Dir,
    /// Imported SQLite source tables
    Sqlite,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Per-player season summary
    Summary {
        /// Only players who appeared for this team
        #[arg(short, long)]
        team: Option<String>,
    },
    /// Leaderboard for one stat
    Leaders {
        stat: Stat,
        /// Minimum games played to qualify (defaults to 3)
        #[arg(short, long)]
        min_games: Option<u32>,
        /// Number of rows (defaults to 10)
        #[arg(long)]
        top: Option<usize>,
        /// Columns to show; defaults depend on the stat
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<Stat>,
    },
    /// Win/loss records ranked by win percentage
    Standings {
        /// Split standings by roster group
        #[arg(short, long)]
        groups: bool,
    },
    /// Single-game highs
    Highs {
        #[arg(short, long)]
        team: Option<String>,
    },
    /// Team, opponent and differential per-game tables
    Teams,
    /// Publish every season table to the export database
    Export {
        #[arg(short, long)]
        min_games: Option<u32>,
    },
    /// Copy the season from the CSV tree into the SQLite source tables
    Import,
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions { shell: Shell },
}
