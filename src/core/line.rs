use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::line::LineSummary;
use crate::ui::messages::{info, success};
use crate::utils::fmt_seconds;

/// Business logic of the line master (lines and their activities).
pub struct LineLogic;

impl LineLogic {
    pub fn add_line(pool: &mut DbPool, name: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidLineName(name.to_string()));
        }

        let id = queries::insert_line(&pool.conn, name)?;
        audit(&pool.conn, "line_add", name, &format!("Line '{name}' added"));
        success(format!("Line '{name}' added"));
        Ok(id)
    }

    pub fn delete_line(pool: &mut DbPool, name: &str) -> AppResult<()> {
        let removed = queries::delete_line(&pool.conn, name)?;
        audit(
            &pool.conn,
            "line_del",
            name,
            &format!("Line '{name}' deleted with {removed} activities"),
        );
        info(format!("Deleted line '{name}' ({removed} activities)"));
        Ok(())
    }

    pub fn list_lines(pool: &mut DbPool) -> AppResult<Vec<LineSummary>> {
        queries::list_lines(&pool.conn)
    }

    pub fn add_activity(
        pool: &mut DbPool,
        line: &str,
        seq_no: i64,
        text: &str,
        time_sec: f64,
    ) -> AppResult<()> {
        queries::insert_activity(&pool.conn, line, seq_no, text.trim(), time_sec)?;
        audit(
            &pool.conn,
            "activity_add",
            line,
            &format!("#{seq_no} '{}' {}s", text.trim(), fmt_seconds(time_sec)),
        );
        success(format!(
            "Activity #{seq_no} added to '{line}' ({}s)",
            fmt_seconds(time_sec)
        ));
        Ok(())
    }

    pub fn delete_activity(pool: &mut DbPool, line: &str, seq_no: i64) -> AppResult<()> {
        queries::delete_activity(&pool.conn, line, seq_no)?;
        audit(
            &pool.conn,
            "activity_del",
            line,
            &format!("#{seq_no} deleted"),
        );
        info(format!("Deleted activity #{seq_no} from '{line}'"));
        Ok(())
    }

    /// Ordered activities of a line plus their total work content.
    pub fn activities(pool: &mut DbPool, line: &str) -> AppResult<(Vec<Activity>, f64)> {
        let acts = queries::load_activities(&pool.conn, line)?;
        let total = acts.iter().map(|a| a.time_sec).sum();
        Ok((acts, total))
    }
}
