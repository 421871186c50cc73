use std::path::PathBuf;

use crate::stats::DEFAULT_TOP_N;

#[derive(Debug, Clone)]
pub struct LeaderSettings {
    pub top_n: usize,
    pub min_games: u32,
}

impl Default for LeaderSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_games: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Root of the `s<season>/...` directory tree
    pub data_dir: PathBuf,
    /// SQLite database holding imported source tables
    pub database_path: PathBuf,
    /// SQLite database the export step publishes to
    pub export_path: PathBuf,
    pub cache_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("csv"),
            database_path: PathBuf::from("hoops_ledger.db"),
            export_path: PathBuf::from("hoops_ledger_export.db"),
            cache_dir: PathBuf::from("cache"),
        }
    }
}

impl StorageSettings {
    /// Defaults overridden by `DATA_DIR`, `DATABASE_PATH`, `EXPORT_PATH` and `CACHE_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env_path("DATA_DIR").unwrap_or(defaults.data_dir),
            database_path: env_path("DATABASE_PATH").unwrap_or(defaults.database_path),
            export_path: env_path("EXPORT_PATH").unwrap_or(defaults.export_path),
            cache_dir: env_path("CACHE_DIR").unwrap_or(defaults.cache_dir),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub leaders: LeaderSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            leaders: LeaderSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }
}
