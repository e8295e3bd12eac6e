use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{Sandbox, sandbox_with_lines};

#[test]
fn test_init_creates_database() {
    let sb = Sandbox::new();
    sb.init();
    assert!(std::path::Path::new(&sb.db).exists());

    sb.run(&["db", "--info"])
        .assert()
        .success()
        .stdout(contains("Lines:"))
        .stdout(contains("20260915_0002_add_activity_index"));
}

#[test]
fn test_commands_require_initialized_database() {
    let sb = Sandbox::new();
    sb.run(&["line", "list"])
        .assert()
        .failure()
        .stderr(contains("laps init"));
}

#[test]
fn test_line_add_list_show() {
    let sb = sandbox_with_lines();

    sb.run(&["line", "list"])
        .assert()
        .success()
        .stdout(contains("ASSY-1"))
        .stdout(contains("PRESS"))
        .stdout(contains("180"));

    sb.run(&["line", "show", "ASSY-1"])
        .assert()
        .success()
        .stdout(contains("step 9"))
        .stdout(contains("Total work content: 180 s"));
}

#[test]
fn test_line_add_duplicate_fails() {
    let sb = sandbox_with_lines();
    sb.run(&["line", "add", "PRESS"])
        .assert()
        .failure()
        .stderr(contains("Line already exists"));
}

#[test]
fn test_line_delete_removes_activities() {
    let sb = sandbox_with_lines();
    sb.run(&["line", "del", "ASSY-1"])
        .assert()
        .success()
        .stdout(contains("9 activities"));

    sb.run(&["line", "show", "ASSY-1"])
        .assert()
        .failure()
        .stderr(contains("Line not found"));
}

#[test]
fn test_activity_rejects_non_positive_time() {
    let sb = sandbox_with_lines();
    sb.run(&[
        "activity", "add", "PRESS", "--seq", "20", "--text", "bad", "--time", "-5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid activity"));
}

#[test]
fn test_activity_rejects_duplicate_sequence() {
    let sb = sandbox_with_lines();
    sb.run(&[
        "activity", "add", "PRESS", "--seq", "10", "--text", "again", "--time", "5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid activity"));
}

#[test]
fn test_activity_delete_unknown_sequence() {
    let sb = sandbox_with_lines();
    sb.run(&["activity", "del", "PRESS", "--seq", "99"])
        .assert()
        .failure()
        .stderr(contains("Activity 99 not found"));
}

#[test]
fn test_plan_balanced_line() {
    let sb = sandbox_with_lines();
    sb.run(&[
        "plan", "--date", "2026-10-16", "--shift", "60", "--qty", "ASSY-1=25",
    ])
    .assert()
    .success()
    .stdout(contains("144.00"))
    .stdout(contains("OP1"))
    .stdout(contains("OP2"))
    .stdout(contains("UNDERUTILIZED"))
    .stdout(contains("balanced with 2 operator(s)"));
}

#[test]
fn test_plan_reports_unresolved_overload() {
    let sb = sandbox_with_lines();
    sb.run(&["plan", "--shift", "60", "--qty", "PRESS=25"])
        .assert()
        .success()
        .stdout(contains("OVERLOAD"))
        .stdout(contains("Unresolved overload on PRESS"));
}

#[test]
fn test_plan_isolates_unknown_line() {
    let sb = sandbox_with_lines();
    sb.run(&[
        "plan", "--shift", "60", "--qty", "NOPE=10", "--qty", "ASSY-1=25",
    ])
    .assert()
    .failure()
    .stdout(contains("balanced with 2 operator(s)"))
    .stderr(contains("NOPE"))
    .stderr(contains("1 line(s) could not be planned"));
}

#[test]
fn test_plan_rejects_zero_quantity_per_line() {
    let sb = sandbox_with_lines();
    sb.run(&["plan", "--qty", "ASSY-1=0"])
        .assert()
        .failure()
        .stderr(contains("Invalid plan input for line 'ASSY-1'"));
}

#[test]
fn test_plan_rejects_malformed_quantity_spec() {
    let sb = sandbox_with_lines();
    sb.run(&["plan", "--qty", "ASSY-1"])
        .assert()
        .failure()
        .stderr(contains("expected LINE=QTY"));
}

#[test]
fn test_plan_empty_line() {
    let sb = sandbox_with_lines();
    sb.run(&["line", "add", "EMPTY"]).assert().success();
    sb.run(&["plan", "--qty", "EMPTY=10"])
        .assert()
        .failure()
        .stderr(contains("has no activities"));
}

#[test]
fn test_plan_isolates_line_with_invalid_stored_activity() {
    let sb = sandbox_with_lines();
    sb.run(&["line", "add", "BAD"]).assert().success();
    sb.insert_zero_time_activity("BAD", 10);

    let out = sb.out("isolated.json");
    let out_s = out.to_string_lossy().to_string();

    sb.run(&[
        "plan", "--shift", "60", "--qty", "BAD=25", "--qty", "ASSY-1=25", "--export", &out_s,
        "--format", "json",
    ])
    .assert()
    .failure()
    .stdout(contains("balanced with 2 operator(s)"))
    .stderr(contains("activity 10 must have a positive standard time"))
    .stderr(contains("1 line(s) could not be planned"));

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).expect("json");
    assert_eq!(v[0]["error"]["kind"], "InvalidActivityTime");
    assert_eq!(v[1]["status"], "ok");
}

#[test]
fn test_plan_unresolved_overload_one_activity_per_operator() {
    let sb = sandbox_with_lines();
    sb.add_line("MIXED", &[500.0, 20.0, 20.0]);

    sb.run(&["plan", "--shift", "60", "--qty", "MIXED=25"])
        .assert()
        .success()
        .stdout(contains("OP3"))
        .stdout(contains("Unresolved overload on MIXED"))
        .stdout(contains("OP1"));
}

#[test]
fn test_plan_export_json() {
    let sb = sandbox_with_lines();
    let out = sb.out("plan.json");
    let out_s = out.to_string_lossy().to_string();

    sb.run(&[
        "plan", "--date", "2026-10-16", "--shift", "60", "--qty", "ASSY-1=25", "--qty",
        "NOPE=5", "--export", &out_s, "--format", "json",
    ])
    .assert()
    .failure();

    let content = fs::read_to_string(&out).expect("json written");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array of outcomes");
    assert_eq!(arr.len(), 2);

    assert_eq!(arr[0]["line_id"], "ASSY-1");
    assert_eq!(arr[0]["status"], "ok");
    assert_eq!(arr[0]["allocation"]["final_manpower"], 2);
    assert_eq!(arr[0]["allocation"]["takt_seconds"], 144.0);
    assert_eq!(arr[0]["allocation"]["buckets"][1]["status"], "UNDERUTILIZED");

    assert_eq!(arr[1]["status"], "error");
    assert_eq!(arr[1]["error"]["kind"], "UnknownLine");
}

#[test]
fn test_plan_export_csv() {
    let sb = sandbox_with_lines();
    let out = sb.out("plan.csv");
    let out_s = out.to_string_lossy().to_string();

    sb.run(&[
        "plan", "--shift", "60", "--qty", "ASSY-1=25", "--export", &out_s, "--format", "csv",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert!(lines.next().unwrap_or_default().starts_with("line,plan_date,operator"));
    assert_eq!(lines.count(), 9);
    assert!(content.contains("OP2"));
}

#[test]
fn test_plan_export_xlsx() {
    let sb = sandbox_with_lines();
    let out = sb.out("reports/plan.xlsx");
    let out_s = out.to_string_lossy().to_string();

    sb.run(&[
        "plan", "--shift", "60", "--qty", "ASSY-1=25", "--qty", "PRESS=25", "--export",
        &out_s,
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = sandbox_with_lines();

    let plain = sb.out("backup.sqlite");
    sb.run(&["backup", "--file", &plain.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(plain.exists());

    let zipped = sb.out("zipped.sqlite");
    sb.run(&["backup", "--file", &zipped.to_string_lossy(), "--compress"])
        .assert()
        .success();
    assert!(sb.out("zipped.zip").exists());
    assert!(!zipped.exists());
}

#[test]
fn test_restore_requires_developer_role() {
    let sb = sandbox_with_lines();
    let backup = sb.out("backup.sqlite");
    sb.run(&["backup", "--file", &backup.to_string_lossy()])
        .assert()
        .success();

    sb.write_config("admin");
    sb.run(&["restore", "--file", &backup.to_string_lossy(), "-f"])
        .assert()
        .failure()
        .stderr(contains("requires the developer role"));
}

#[test]
fn test_restore_from_compressed_backup() {
    let sb = sandbox_with_lines();
    let backup = sb.out("snapshot.sqlite");
    sb.run(&["backup", "--file", &backup.to_string_lossy(), "--compress"])
        .assert()
        .success();

    sb.run(&["line", "del", "PRESS"]).assert().success();

    sb.write_config("developer");
    sb.run(&["restore", "--file", &sb.out("snapshot.zip").to_string_lossy(), "-f"])
        .assert()
        .success()
        .stdout(contains("Database restored"));

    sb.run(&["line", "list"])
        .assert()
        .success()
        .stdout(contains("PRESS"));
}

#[test]
fn test_restore_rejects_foreign_file() {
    let sb = sandbox_with_lines();
    let junk = sb.out("junk.sqlite");
    fs::write(&junk, b"not a database").expect("write junk");

    sb.write_config("developer");
    sb.run(&["restore", "--file", &junk.to_string_lossy(), "-f"])
        .assert()
        .failure()
        .stderr(contains("is not a LAPS database"));

    sb.run(&["line", "list"]).assert().success().stdout(contains("ASSY-1"));
}

#[test]
fn test_log_records_operations() {
    let sb = sandbox_with_lines();
    sb.run(&["plan", "--shift", "60", "--qty", "ASSY-1=25"])
        .assert()
        .success();

    sb.run(&["log", "--print"])
        .assert()
        .success()
        .stdout(contains("line_add"))
        .stdout(contains("plan"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_config_check_reports_missing_fields() {
    let sb = Sandbox::new();
    fs::write(sb.path().join("laps.conf"), format!("database: {}\n", sb.db)).expect("write");

    sb.laps()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("role"));

    sb.laps()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    sb.laps()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_version_flag() {
    let sb = Sandbox::new();
    sb.laps()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("laps "));
}
