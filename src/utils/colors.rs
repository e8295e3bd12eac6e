/// ANSI color helper utilities for terminal output.
use crate::models::status::OperatorStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Overload → red, underutilized → yellow, ok → green.
pub fn color_for_status(status: OperatorStatus) -> &'static str {
    match status {
        OperatorStatus::Overload => RED,
        OperatorStatus::Underutilized => YELLOW,
        OperatorStatus::Ok => GREEN,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
