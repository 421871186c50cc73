use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Pool over a SQLite file, created on first connect
pub fn create_pool<P: AsRef<Path>>(database_path: P) -> Result<DbPool> {
    let path = database_path.as_ref();
    let manager = SqliteConnectionManager::file(path).with_init(|conn| {
        // Readers and the import transaction share the file
        conn.busy_timeout(std::time::Duration::from_secs(5))
    });

    r2d2::Pool::builder()
        .max_size(4)
        .build(manager)
        .with_context(|| format!("Failed to open database pool for {}", path.display()))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get().context("Failed to get database connection from pool")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_creates_database_file() {
        let path = std::env::temp_dir().join("hoops_ledger_connection.db");
        let _ = std::fs::remove_file(&path);

        let pool = create_pool(&path).unwrap();
        let conn = get_connection(&pool).unwrap();
        let timeout: i64 = conn.query_row("PRAGMA busy_timeout", [], |row| row.get(0)).unwrap();

        assert_eq!(timeout, 5000);
        assert!(path.exists());

        drop(conn);
        drop(pool);
        let _ = std::fs::remove_file(&path);
    }
}
