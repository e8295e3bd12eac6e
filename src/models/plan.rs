use chrono::NaiveDate;
use serde::Serialize;

/// One planning request for one line. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub line_id: String,
    pub plan_date: NaiveDate,
    pub shift_minutes: i64,
    pub plan_quantity: i64,
}

impl PlanEntry {
    pub fn new(
        line_id: impl Into<String>,
        plan_date: NaiveDate,
        shift_minutes: i64,
        plan_quantity: i64,
    ) -> Self {
        Self {
            line_id: line_id.into(),
            plan_date,
            shift_minutes,
            plan_quantity,
        }
    }
}
