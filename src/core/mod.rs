pub mod allocation;
pub mod backup;
pub mod calculator;
pub mod line;
pub mod log;
pub mod plan;
