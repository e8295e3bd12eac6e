use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Check whether a table exists in the connected database.
pub fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Row count of a table known to exist.
pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    // table names cannot be bound as parameters
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', ""));
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

/// True if `path` opens read-only as SQLite and carries the line master schema.
pub fn is_laps_database(path: &Path) -> bool {
    let Ok(conn) = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY) else {
        return false;
    };
    table_exists(&conn, "lines").unwrap_or(false)
}
