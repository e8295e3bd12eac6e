use super::activity::Activity;
use super::status::OperatorStatus;
use crate::errors::EngineError;
use chrono::NaiveDate;
use serde::Serialize;

/// Contiguous run of activities assigned to one operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub operator_index: usize, // 1-based, order-preserving
    pub activities: Vec<Activity>,
    pub total_time_sec: f64,
    pub status: OperatorStatus,
}

impl Bucket {
    /// Display name used on screen and in exports (`OP1`, `OP2`, ...).
    pub fn operator_name(&self) -> String {
        format!("OP{}", self.operator_index)
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Outcome of planning one line for one plan entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub line_id: String,
    pub plan_date: NaiveDate,
    pub shift_minutes: i64,
    pub plan_quantity: i64,
    pub shift_seconds: i64,
    pub takt_seconds: f64,
    pub total_work_content_seconds: f64,
    pub theoretical_manpower: usize,
    pub final_manpower: usize,
    pub max_bucket_seconds: f64,
    pub buckets: Vec<Bucket>,
    /// Set when some operator is still overloaded at `final_manpower`.
    pub unresolved_overload: bool,
}

impl AllocationResult {
    pub fn overloaded_operators(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|b| b.status.is_overload())
    }

    /// Work content over available operator time, in percent.
    pub fn line_efficiency(&self) -> f64 {
        if self.final_manpower == 0 || self.takt_seconds <= 0.0 {
            return 0.0;
        }
        self.total_work_content_seconds / (self.final_manpower as f64 * self.takt_seconds) * 100.0
    }
}

/// Per-line entry of a batch run: either a result or the typed failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    pub line_id: String,
    pub plan_date: NaiveDate,
    pub result: Result<AllocationResult, EngineError>,
}

/// All outcomes of one submission, in submission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
}

impl BatchReport {
    pub fn successes(&self) -> impl Iterator<Item = &AllocationResult> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &EngineError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_unresolved_overload(&self) -> bool {
        self.successes().any(|r| r.unresolved_overload)
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
