use crate::core::allocation::run_batch;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_catalog;
use crate::errors::{AppError, AppResult};
use crate::models::allocation::BatchReport;
use crate::models::plan::PlanEntry;
use chrono::NaiveDate;
use tracing::debug;

/// Daily plan: resolve line snapshots, run the engine, record the run.
pub struct PlanLogic;

impl PlanLogic {
    /// Parse `LINE=QTY` specs into plan entries, keeping submission order.
    ///
    /// Only the syntax is checked here; non-positive quantities are left to
    /// the engine so they are reported against their line.
    pub fn parse_entries(
        specs: &[String],
        plan_date: NaiveDate,
        shift_minutes: i64,
    ) -> AppResult<Vec<PlanEntry>> {
        specs
            .iter()
            .map(|spec| {
                let (line, qty) = spec
                    .rsplit_once('=')
                    .ok_or_else(|| AppError::InvalidQuantitySpec(spec.clone()))?;

                let line = line.trim();
                if line.is_empty() {
                    return Err(AppError::InvalidQuantitySpec(spec.clone()));
                }

                let qty: i64 = qty
                    .trim()
                    .parse()
                    .map_err(|_| AppError::InvalidQuantitySpec(spec.clone()))?;

                Ok(PlanEntry::new(line, plan_date, shift_minutes, qty))
            })
            .collect()
    }

    pub fn run(pool: &mut DbPool, entries: &[PlanEntry]) -> AppResult<BatchReport> {
        let catalog = load_catalog(&pool.conn, entries.iter().map(|e| e.line_id.as_str()))?;
        debug!(requested = entries.len(), found = catalog.len(), "line snapshots loaded");

        let report = run_batch(entries, &catalog);

        for outcome in &report.outcomes {
            let message = match &outcome.result {
                Ok(r) => format!(
                    "{}: qty={} takt={:.2}s manpower={}{}",
                    outcome.plan_date,
                    r.plan_quantity,
                    r.takt_seconds,
                    r.final_manpower,
                    if r.unresolved_overload {
                        " (unresolved overload)"
                    } else {
                        ""
                    }
                ),
                Err(e) => format!("{}: {}", outcome.plan_date, e),
            };
            audit(&pool.conn, "plan", &outcome.line_id, &message);
        }

        Ok(report)
    }
}
