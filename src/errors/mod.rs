use std::path::Path;

use anyhow::Context as _;

/// Context for file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Context for malformed spreadsheet rows
pub fn parse_context(data_type: &str, path: &Path) -> String {
    format!("Failed to parse {} from {}", data_type, path.display())
}

/// Context for database table operations
pub fn table_context(operation: &str, table: &str) -> String {
    format!("Failed to {} table {}", operation, table)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type, path))
}

/// Wrap result with table context
pub fn with_table_context<T, E>(result: Result<T, E>, operation: &str, table: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| table_context(operation, table))
}
