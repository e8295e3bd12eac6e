use crate::errors::{AppError, AppResult, EngineError};
use crate::models::activity::{Activity, LineConfig};
use crate::models::line::LineSummary;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeMap;
use tracing::warn;

pub fn find_line_id(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    Ok(conn
        .query_row("SELECT id FROM lines WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?)
}

fn require_line_id(conn: &Connection, name: &str) -> AppResult<i64> {
    find_line_id(conn, name)?.ok_or_else(|| AppError::LineNotFound(name.to_string()))
}

pub fn insert_line(conn: &Connection, name: &str) -> AppResult<i64> {
    if find_line_id(conn, name)?.is_some() {
        return Err(AppError::LineExists(name.to_string()));
    }

    conn.execute(
        "INSERT INTO lines (name, created_at) VALUES (?1, ?2)",
        params![name, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete a line and its activities. Returns the number of activities removed.
pub fn delete_line(conn: &Connection, name: &str) -> AppResult<usize> {
    let id = require_line_id(conn, name)?;

    let tx = conn.unchecked_transaction()?;
    let removed = tx.execute("DELETE FROM activities WHERE line_id = ?1", [id])?;
    tx.execute("DELETE FROM lines WHERE id = ?1", [id])?;
    tx.commit()?;

    Ok(removed)
}

fn map_summary(row: &Row) -> rusqlite::Result<LineSummary> {
    Ok(LineSummary {
        id: row.get("id")?,
        name: row.get("name")?,
        activity_count: row.get("activity_count")?,
        work_content_sec: row.get("work_content")?,
        created_at: row.get("created_at")?,
    })
}

pub fn list_lines(conn: &Connection) -> AppResult<Vec<LineSummary>> {
    let mut stmt = conn.prepare(
        "SELECT l.id, l.name, l.created_at,
                COUNT(a.id)                AS activity_count,
                COALESCE(SUM(a.time_sec), 0.0) AS work_content
         FROM lines l
         LEFT JOIN activities a ON a.line_id = l.id
         GROUP BY l.id
         ORDER BY l.name ASC",
    )?;

    let rows = stmt.query_map([], map_summary)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_activity(
    conn: &Connection,
    line: &str,
    seq_no: i64,
    text: &str,
    time_sec: f64,
) -> AppResult<()> {
    if !time_sec.is_finite() || time_sec <= 0.0 {
        return Err(AppError::InvalidActivity(format!(
            "time must be > 0 seconds (got {time_sec})"
        )));
    }

    let line_id = require_line_id(conn, line)?;

    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM activities WHERE line_id = ?1 AND seq_no = ?2",
            params![line_id, seq_no],
            |row| row.get(0),
        )
        .optional()?;

    if exists.is_some() {
        return Err(AppError::InvalidActivity(format!(
            "sequence {seq_no} already used on line '{line}'"
        )));
    }

    conn.execute(
        "INSERT INTO activities (line_id, seq_no, text, time_sec) VALUES (?1, ?2, ?3, ?4)",
        params![line_id, seq_no, text, time_sec],
    )?;
    Ok(())
}

pub fn delete_activity(conn: &Connection, line: &str, seq_no: i64) -> AppResult<()> {
    let line_id = require_line_id(conn, line)?;

    let n = conn.execute(
        "DELETE FROM activities WHERE line_id = ?1 AND seq_no = ?2",
        params![line_id, seq_no],
    )?;

    if n == 0 {
        return Err(AppError::ActivityNotFound {
            line: line.to_string(),
            seq: seq_no,
        });
    }
    Ok(())
}

fn map_activity(row: &Row) -> rusqlite::Result<Activity> {
    Ok(Activity {
        sequence_no: row.get("seq_no")?,
        text: row.get("text")?,
        time_sec: row.get("time_sec")?,
    })
}

/// Activities of a line ordered by sequence number.
pub fn load_activities(conn: &Connection, line: &str) -> AppResult<Vec<Activity>> {
    let line_id = require_line_id(conn, line)?;

    let mut stmt = conn.prepare(
        "SELECT seq_no, text, time_sec FROM activities
         WHERE line_id = ?1
         ORDER BY seq_no ASC",
    )?;

    let rows = stmt.query_map([line_id], map_activity)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Immutable snapshot of one line for the allocation engine.
pub fn load_line_config(conn: &Connection, line: &str) -> AppResult<LineConfig> {
    let activities = load_activities(conn, line)?;
    Ok(LineConfig::new(line, activities)?)
}

/// Snapshot of the requested lines. Unknown names are left out so the
/// engine can report them per line; a line whose stored activities do not
/// form a valid snapshot is kept as its own `Err`.
pub fn load_catalog<'a, I>(
    conn: &Connection,
    names: I,
) -> AppResult<BTreeMap<String, Result<LineConfig, EngineError>>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut catalog = BTreeMap::new();

    for name in names {
        if catalog.contains_key(name) {
            continue;
        }
        match load_line_config(conn, name) {
            Ok(cfg) => {
                catalog.insert(name.to_string(), Ok(cfg));
            }
            Err(AppError::Engine(e)) => {
                warn!(line = name, error = %e, "invalid line snapshot");
                catalog.insert(name.to_string(), Err(e));
            }
            Err(AppError::LineNotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(catalog)
}
