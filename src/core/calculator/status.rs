use crate::models::status::OperatorStatus;

/// Below this share of takt an operator counts as underutilized.
pub const UNDERUTILIZED_RATIO: f64 = 0.6;

/// - `> takt`              → Overload
/// - `< 0.6 * takt`        → Underutilized
/// - otherwise (inclusive) → Ok
pub fn classify(total_time_sec: f64, takt_seconds: f64) -> OperatorStatus {
    if total_time_sec > takt_seconds {
        OperatorStatus::Overload
    } else if total_time_sec < UNDERUTILIZED_RATIO * takt_seconds {
        OperatorStatus::Underutilized
    } else {
        OperatorStatus::Ok
    }
}
