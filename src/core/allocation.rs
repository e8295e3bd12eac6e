//! Per-line allocation run and the multi-line batch loop.

use crate::core::calculator::{manpower, status, takt, work_content};
use crate::errors::EngineError;
use crate::models::activity::LineConfig;
use crate::models::allocation::{AllocationResult, BatchReport, Bucket, LineOutcome};
use crate::models::plan::PlanEntry;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument};

/// Read-only access to line configurations, keyed by line id.
///
/// `None` means the line is unknown. `Some(Err(_))` is a line whose stored
/// snapshot is invalid; it fails on its own without touching the others.
pub trait LineCatalog {
    fn line(&self, line_id: &str) -> Option<Result<&LineConfig, EngineError>>;
}

impl LineCatalog for BTreeMap<String, LineConfig> {
    fn line(&self, line_id: &str) -> Option<Result<&LineConfig, EngineError>> {
        self.get(line_id).map(Ok)
    }
}

impl LineCatalog for HashMap<String, LineConfig> {
    fn line(&self, line_id: &str) -> Option<Result<&LineConfig, EngineError>> {
        self.get(line_id).map(Ok)
    }
}

impl LineCatalog for BTreeMap<String, Result<LineConfig, EngineError>> {
    fn line(&self, line_id: &str) -> Option<Result<&LineConfig, EngineError>> {
        self.get(line_id).map(|snapshot| snapshot.as_ref().map_err(|e| e.clone()))
    }
}

/// Plan one line: takt, then work content, then the manpower search, then
/// classification of every operator.
#[instrument(skip(entry, line), fields(line_id = %entry.line_id, plan_quantity = entry.plan_quantity))]
pub fn allocate_line(entry: &PlanEntry, line: &LineConfig) -> Result<AllocationResult, EngineError> {
    let takt = takt::takt(&entry.line_id, entry.shift_minutes, entry.plan_quantity)?;
    let total = work_content::total_work_content(line)?;

    let theoretical = manpower::theoretical_manpower(total, takt.takt_seconds);
    let solution = manpower::solve(line.activities(), takt.takt_seconds, total);

    let buckets: Vec<Bucket> = solution
        .loads
        .into_iter()
        .enumerate()
        .map(|(i, load)| Bucket {
            operator_index: i + 1,
            status: status::classify(load.total_time_sec, takt.takt_seconds),
            total_time_sec: load.total_time_sec,
            activities: load.activities,
        })
        .collect();

    let max_bucket_seconds = buckets.iter().map(|b| b.total_time_sec).fold(0.0, f64::max);

    if solution.unresolved_overload {
        info!(
            manpower = solution.manpower,
            max_bucket_seconds, "overload persists with one operator per activity"
        );
    } else {
        debug!(
            manpower = solution.manpower,
            attempts = solution.attempts.len(),
            "line balanced"
        );
    }

    Ok(AllocationResult {
        line_id: entry.line_id.clone(),
        plan_date: entry.plan_date,
        shift_minutes: entry.shift_minutes,
        plan_quantity: entry.plan_quantity,
        shift_seconds: takt.shift_seconds,
        takt_seconds: takt.takt_seconds,
        total_work_content_seconds: total,
        theoretical_manpower: theoretical,
        final_manpower: solution.manpower,
        max_bucket_seconds,
        buckets,
        unresolved_overload: solution.unresolved_overload,
    })
}

/// Plan every entry independently, in submission order.
///
/// A failing entry yields an `Err` outcome for that line only.
pub fn run_batch<C>(entries: &[PlanEntry], catalog: &C) -> BatchReport
where
    C: LineCatalog + ?Sized,
{
    let outcomes = entries
        .iter()
        .map(|entry| {
            let result = match catalog.line(&entry.line_id) {
                Some(Ok(line)) => allocate_line(entry, line),
                Some(Err(e)) => Err(e),
                None => Err(EngineError::UnknownLine {
                    line_id: entry.line_id.clone(),
                }),
            };

            if let Err(e) = &result {
                debug!(line_id = %entry.line_id, error = %e, "line not planned");
            }

            LineOutcome {
                line_id: entry.line_id.clone(),
                plan_date: entry.plan_date,
                result,
            }
        })
        .collect();

    BatchReport { outcomes }
}
