#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated LAPS environment: its own config dir and database file.
pub struct Sandbox {
    dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir.path().join("laps_test.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    /// `laps` with the config dir pointed inside the sandbox.
    pub fn laps(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("laps");
        cmd.env("LAPS_CONFIG_DIR", self.dir.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// `laps --db <sandbox db> ...`
    pub fn run(&self, args: &[&str]) -> Command {
        let mut cmd = self.laps();
        cmd.args(["--db", &self.db]).args(args);
        cmd
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for an output file inside the sandbox.
    pub fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn init(&self) {
        self.laps()
            .args(["--db", &self.db, "--test", "init"])
            .assert()
            .success();
    }

    pub fn add_line(&self, name: &str, times: &[f64]) {
        self.run(&["line", "add", name]).assert().success();
        for (i, t) in times.iter().enumerate() {
            let seq = ((i + 1) * 10).to_string();
            let text = format!("step {}", i + 1);
            let time = t.to_string();
            self.run(&[
                "activity", "add", name, "--seq", &seq, "--text", &text, "--time", &time,
            ])
            .assert()
            .success();
        }
    }

    /// Store an activity with a zero standard time, bypassing the CHECK
    /// constraint, as an imported or hand-edited database could carry.
    pub fn insert_zero_time_activity(&self, line: &str, seq: i64) {
        let conn = rusqlite::Connection::open(&self.db).expect("open db");
        conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
            .expect("disable checks");
        conn.execute(
            "INSERT INTO activities (line_id, seq_no, text, time_sec)
             SELECT id, ?2, 'zero', 0.0 FROM lines WHERE name = ?1",
            rusqlite::params![line, seq],
        )
        .expect("insert activity");
    }

    /// Write a laps.conf with the given role, pointing at the sandbox db.
    pub fn write_config(&self, role: &str) {
        let yaml = format!(
            "database: {}\ndefault_shift_minutes: 480\nrole: {}\nlog_level: warn\nseparator_char: '-'\n",
            self.db, role
        );
        fs::write(self.dir.path().join("laps.conf"), yaml).expect("write config");
    }
}

/// Initialized sandbox with one 9×20s line `ASSY-1` and a single 500s line `PRESS`.
pub fn sandbox_with_lines() -> Sandbox {
    let sb = Sandbox::new();
    sb.init();
    sb.add_line("ASSY-1", &[20.0; 9]);
    sb.add_line("PRESS", &[500.0]);
    sb
}
