//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::db_utils::table_exists;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file as-is (no schema check). Used by `init` and `db --migrate`.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Open an initialized database; fails if the line master schema is missing.
    pub fn new(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::Config(format!(
                "Database not found: {path} (run `laps init` first)"
            )));
        }

        let pool = Self::open(path)?;
        if !table_exists(&pool.conn, "lines")? {
            return Err(AppError::Config(format!(
                "Database {path} is not initialized (run `laps init` or `laps db --migrate`)"
            )));
        }
        Ok(pool)
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
