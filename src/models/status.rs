use serde::Serialize;

/// Load status of one operator against takt time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorStatus {
    Ok,
    Overload,
    Underutilized,
}

impl OperatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorStatus::Ok => "OK",
            OperatorStatus::Overload => "OVERLOAD",
            OperatorStatus::Underutilized => "UNDERUTILIZED",
        }
    }

    pub fn is_overload(&self) -> bool {
        matches!(self, OperatorStatus::Overload)
    }
}
