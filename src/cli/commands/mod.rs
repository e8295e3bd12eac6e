pub mod activity;
pub mod backup;
pub mod config;
pub mod db;
pub mod init;
pub mod line;
pub mod log;
pub mod plan;
pub mod restore;
