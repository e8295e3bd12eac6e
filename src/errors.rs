//! Unified error types.
//! The allocation engine reports `EngineError`, everything else (db, cli,
//! export, config) returns `AppError` to keep error handling consistent.

use std::io;
use thiserror::Error;

/// Failures of the allocation engine for a single line.
///
/// Always carries the offending line identifier so the message can be shown
/// verbatim next to the line it belongs to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(
        "Invalid plan input for line '{line_id}': shift_minutes={shift_minutes}, plan_quantity={plan_quantity} (both must be > 0)"
    )]
    InvalidPlanInput {
        line_id: String,
        shift_minutes: i64,
        plan_quantity: i64,
    },

    #[error("Line '{line_id}' has no activities and cannot be planned")]
    EmptyLine { line_id: String },

    #[error("Line '{line_id}' is not defined in the line master")]
    UnknownLine { line_id: String },

    #[error("Line '{line_id}' has more than one activity with sequence number {sequence_no}")]
    DuplicateSequence { line_id: String, sequence_no: i64 },

    #[error("Line '{line_id}': activity {sequence_no} must have a positive standard time")]
    InvalidActivityTime { line_id: String, sequence_no: i64 },
}

impl EngineError {
    /// Short machine-readable kind, used in exports.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidPlanInput { .. } => "InvalidPlanInput",
            EngineError::EmptyLine { .. } => "EmptyLineError",
            EngineError::UnknownLine { .. } => "UnknownLine",
            EngineError::DuplicateSequence { .. } => "DuplicateSequence",
            EngineError::InvalidActivityTime { .. } => "InvalidActivityTime",
        }
    }

    pub fn line_id(&self) -> &str {
        match self {
            EngineError::InvalidPlanInput { line_id, .. }
            | EngineError::EmptyLine { line_id }
            | EngineError::UnknownLine { line_id }
            | EngineError::DuplicateSequence { line_id, .. }
            | EngineError::InvalidActivityTime { line_id, .. } => line_id,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid quantity spec '{0}': expected LINE=QTY")]
    InvalidQuantitySpec(String),

    // ---------------------------
    // Line master
    // ---------------------------
    #[error("Line not found: {0}")]
    LineNotFound(String),

    #[error("Invalid line name: '{0}'")]
    InvalidLineName(String),

    #[error("Line already exists: {0}")]
    LineExists(String),

    #[error("Activity {seq} not found on line '{line}'")]
    ActivityNotFound { line: String, seq: i64 },

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    // ---------------------------
    // Planning
    // ---------------------------
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0} line(s) could not be planned")]
    PlanFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Operation '{0}' requires the developer role")]
    Unauthorized(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
