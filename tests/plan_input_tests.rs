use chrono::NaiveDate;
use laps::core::plan::PlanLogic;
use laps::errors::AppError;
use laps::utils::date::parse_date;
use laps::utils::{fmt_seconds, fmt_takt};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_parse_entries_keeps_submission_order() {
    let specs = vec![
        "WELD-2=120".to_string(),
        "ASSY A = 200".to_string(),
        "PRESS=0".to_string(),
    ];
    let entries = PlanLogic::parse_entries(&specs, day(), 450).unwrap();

    let names: Vec<&str> = entries.iter().map(|e| e.line_id.as_str()).collect();
    assert_eq!(names, vec!["WELD-2", "ASSY A", "PRESS"]);
    assert_eq!(entries[1].plan_quantity, 200);
    assert_eq!(entries[2].plan_quantity, 0);
    assert!(entries.iter().all(|e| e.shift_minutes == 450 && e.plan_date == day()));
}

#[test]
fn test_parse_entries_splits_on_last_equals() {
    let specs = vec!["A=B=30".to_string()];
    let entries = PlanLogic::parse_entries(&specs, day(), 480).unwrap();
    assert_eq!(entries[0].line_id, "A=B");
    assert_eq!(entries[0].plan_quantity, 30);
}

#[test]
fn test_parse_entries_rejects_malformed_specs() {
    for bad in ["ASSY", "=10", "ASSY=ten", "ASSY=1.5"] {
        let err = PlanLogic::parse_entries(&[bad.to_string()], day(), 480).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidQuantitySpec(ref s) if s == bad),
            "unexpected error for {bad}: {err}"
        );
    }
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-10-16").unwrap(), day());
    assert!(matches!(parse_date("16/10/2026"), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_number_formatting() {
    assert_eq!(fmt_takt(144.0), "144.00");
    assert_eq!(fmt_takt(28800.0 / 190.0), "151.58");
    assert_eq!(fmt_seconds(140.0), "140");
    assert_eq!(fmt_seconds(86.4), "86.4");
    assert_eq!(fmt_seconds(0.0), "0");
}
