use crate::errors::EngineError;
use crate::models::activity::LineConfig;

/// Sum of standard times over the line's ordered activities.
pub fn total_work_content(line: &LineConfig) -> Result<f64, EngineError> {
    if line.is_empty() {
        return Err(EngineError::EmptyLine {
            line_id: line.line_id.clone(),
        });
    }

    Ok(line.activities().iter().map(|a| a.time_sec).sum())
}
