pub mod activity;
pub mod allocation;
pub mod line;
pub mod plan;
pub mod status;
