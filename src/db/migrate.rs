use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Line master: lines and their ordered activities.
fn create_line_master(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lines (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS activities (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            line_id   INTEGER NOT NULL REFERENCES lines(id) ON DELETE CASCADE,
            seq_no    INTEGER NOT NULL,
            text      TEXT NOT NULL,
            time_sec  REAL NOT NULL CHECK(time_sec > 0),
            UNIQUE(line_id, seq_no)
        );
        "#,
    )?;
    Ok(())
}

fn add_activity_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_activities_line_seq ON activities(line_id, seq_no);",
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20260901_0001_create_line_master",
        "Created lines and activities tables",
        create_line_master,
    ),
    (
        "20260915_0002_add_activity_index",
        "Added (line_id, seq_no) index on activities",
        add_activity_index,
    ),
];

/// Public entry point: run all pending migrations, in order.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        apply(&tx)?;
        mark_applied(&tx, version, message)?;
        tx.commit()?;

        success(format!("Migration applied: {version} → {message}"));
        applied.push(*version);
    }

    Ok(applied)
}
