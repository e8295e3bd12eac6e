use crate::errors::EngineError;

/// Shift length and takt time derived from a plan entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Takt {
    pub shift_seconds: i64,
    pub takt_seconds: f64,
}

/// takt = (shift_minutes * 60) / plan_quantity
///
/// Non-positive inputs are rejected so the result is never infinite or NaN.
pub fn takt(line_id: &str, shift_minutes: i64, plan_quantity: i64) -> Result<Takt, EngineError> {
    let invalid = || EngineError::InvalidPlanInput {
        line_id: line_id.to_string(),
        shift_minutes,
        plan_quantity,
    };

    if shift_minutes <= 0 || plan_quantity <= 0 {
        return Err(invalid());
    }

    let shift_seconds = shift_minutes.checked_mul(60).ok_or_else(invalid)?;

    Ok(Takt {
        shift_seconds,
        takt_seconds: shift_seconds as f64 / plan_quantity as f64,
    })
}
