use anyhow::Result;
use log::debug;

use crate::domain::{Cell, Table};
use crate::errors::with_table_context;
use super::connection::DbConn;

/// Replaces table `name` with the contents of `table`.
///
/// The table is dropped, recreated with columns typed from the first row and
/// filled inside a single transaction.
pub fn write_table(conn: &mut DbConn, name: &str, table: &Table) -> Result<()> {
    let tx = with_table_context(conn.transaction(), "open transaction for", name)?;

    with_table_context(
        tx.execute(&format!("DROP TABLE IF EXISTS {}", quote(name)), []),
        "drop",
        name,
    )?;
    with_table_context(tx.execute(&create_sql(name, table), []), "create", name)?;

    {
        let mut stmt = with_table_context(tx.prepare(&insert_sql(name, table)), "prepare insert for", name)?;
        for row in &table.rows {
            let values: Vec<rusqlite::types::Value> = row.iter().map(to_sql_value).collect();
            with_table_context(stmt.execute(rusqlite::params_from_iter(values)), "insert into", name)?;
        }
    }

    with_table_context(tx.commit(), "commit", name)?;
    debug!("Wrote {} rows to table {}", table.len(), name);
    Ok(())
}

/// Reads a table back as rows of cells, in insertion order
pub fn read_table(conn: &mut DbConn, name: &str) -> Result<Table> {
    let sql = format!("SELECT * FROM {} ORDER BY rowid", quote(name));
    let mut stmt = with_table_context(conn.prepare(&sql), "read", name)?;

    let headers: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = headers.len();
    let mut table = Table::new(headers);

    let rows = stmt.query_map([], |row| {
        (0..width)
            .map(|idx| row.get::<_, rusqlite::types::Value>(idx).map(from_sql_value))
            .collect::<rusqlite::Result<Vec<Cell>>>()
    })?;
    for row in rows {
        table.push(row?);
    }

    Ok(table)
}

fn create_sql(name: &str, table: &Table) -> String {
    let columns: Vec<String> = table
        .headers
        .iter()
        .zip(table.column_types())
        .map(|(header, ty)| format!("{} {}", quote(header), ty))
        .collect();
    format!("CREATE TABLE {} ({})", quote(name), columns.join(", "))
}

fn insert_sql(name: &str, table: &Table) -> String {
    let columns: Vec<String> = table.headers.iter().map(|h| quote(h)).collect();
    let placeholders: Vec<String> = (1..=table.headers.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Identifiers like `FG%` and `Player(s)` need quoting
fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn to_sql_value(cell: &Cell) -> rusqlite::types::Value {
    match cell {
        Cell::Text(s) => rusqlite::types::Value::Text(s.clone()),
        Cell::Int(i) => rusqlite::types::Value::Integer(*i),
        Cell::Real(r) => rusqlite::types::Value::Real(*r),
    }
}

fn from_sql_value(value: rusqlite::types::Value) -> Cell {
    match value {
        rusqlite::types::Value::Integer(i) => Cell::Int(i),
        rusqlite::types::Value::Real(r) => Cell::Real(r),
        rusqlite::types::Value::Text(s) => Cell::Text(s),
        rusqlite::types::Value::Null => Cell::Text(String::new()),
        rusqlite::types::Value::Blob(_) => Cell::Text(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_pool, get_connection};

    #[test]
    fn test_write_replaces_previous_contents() {
        let path = std::env::temp_dir().join("hoops_ledger_tables_test.db");
        let _ = std::fs::remove_file(&path);
        let pool = create_pool(&path).unwrap();
        let mut conn = get_connection(&pool).unwrap();

        let mut first = Table::new(["Player", "GP", "FG%"]);
        first.push(vec![Cell::text("A"), Cell::Int(2), Cell::Real(0.5)]);
        first.push(vec![Cell::text("B"), Cell::Int(3), Cell::Real(0.25)]);
        write_table(&mut conn, "FGP", &first).unwrap();

        let mut second = Table::new(["Player", "GP", "FG%"]);
        second.push(vec![Cell::text("C"), Cell::Int(1), Cell::Real(1.0)]);
        write_table(&mut conn, "FGP", &second).unwrap();

        let stored = read_table(&mut conn, "FGP").unwrap();
        assert_eq!(stored, second);

        drop(conn);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_quotes_identifiers() {
        assert_eq!(quote("Player(s)"), "\"Player(s)\"");
        assert_eq!(quote("a\"b"), "\"a\"\"b\"");
    }
}
