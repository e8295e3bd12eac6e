// src/export/model.rs

use crate::models::allocation::{AllocationResult, BatchReport, LineOutcome};
use crate::utils::{fmt_seconds, fmt_takt};
use serde::Serialize;

/// Flat row: one per activity (or one per empty operator).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AllocationRow {
    pub line: String,
    pub plan_date: String,
    pub operator: String,
    pub sequence_no: Option<i64>,
    pub activity: String,
    pub time_sec: f64,
    pub operator_total_sec: f64,
    pub operator_status: String,
}

/// One row per line outcome; failed lines carry the error text.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub line: String,
    pub plan_date: String,
    pub plan_quantity: Option<i64>,
    pub shift_minutes: Option<i64>,
    pub takt_sec: Option<String>,
    pub work_content_sec: Option<f64>,
    pub theoretical_manpower: Option<usize>,
    pub final_manpower: Option<usize>,
    pub max_operator_sec: Option<f64>,
    pub result: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ErrorExport {
    pub kind: &'static str,
    pub message: String,
}

/// JSON view of a line outcome.
#[derive(Serialize, Clone, Debug)]
pub struct OutcomeExport<'a> {
    pub line_id: &'a str,
    pub plan_date: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<&'a AllocationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorExport>,
}

impl<'a> From<&'a LineOutcome> for OutcomeExport<'a> {
    fn from(o: &'a LineOutcome) -> Self {
        match &o.result {
            Ok(r) => OutcomeExport {
                line_id: &o.line_id,
                plan_date: o.plan_date.to_string(),
                status: if r.unresolved_overload {
                    "unresolved_overload"
                } else {
                    "ok"
                },
                allocation: Some(r),
                error: None,
            },
            Err(e) => OutcomeExport {
                line_id: &o.line_id,
                plan_date: o.plan_date.to_string(),
                status: "error",
                allocation: None,
                error: Some(ErrorExport {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

pub(crate) fn allocation_headers() -> Vec<&'static str> {
    vec![
        "line",
        "plan_date",
        "operator",
        "sequence_no",
        "activity",
        "time_sec",
        "operator_total_sec",
        "operator_status",
    ]
}

pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec![
        "line",
        "plan_date",
        "plan_quantity",
        "shift_minutes",
        "takt_sec",
        "work_content_sec",
        "theoretical_manpower",
        "final_manpower",
        "max_operator_sec",
        "result",
    ]
}

fn rows_for_result(r: &AllocationResult) -> Vec<AllocationRow> {
    let mut out = Vec::new();

    for b in &r.buckets {
        let base = AllocationRow {
            line: r.line_id.clone(),
            plan_date: r.plan_date.to_string(),
            operator: b.operator_name(),
            sequence_no: None,
            activity: String::new(),
            time_sec: 0.0,
            operator_total_sec: b.total_time_sec,
            operator_status: b.status.as_str().to_string(),
        };

        if b.is_empty() {
            out.push(base);
            continue;
        }

        for a in &b.activities {
            out.push(AllocationRow {
                sequence_no: Some(a.sequence_no),
                activity: a.text.clone(),
                time_sec: a.time_sec,
                ..base.clone()
            });
        }
    }

    out
}

pub(crate) fn allocation_rows(report: &BatchReport) -> Vec<AllocationRow> {
    report.successes().flat_map(rows_for_result).collect()
}

pub(crate) fn summary_rows(report: &BatchReport) -> Vec<SummaryRow> {
    report
        .outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(r) => SummaryRow {
                line: o.line_id.clone(),
                plan_date: o.plan_date.to_string(),
                plan_quantity: Some(r.plan_quantity),
                shift_minutes: Some(r.shift_minutes),
                takt_sec: Some(fmt_takt(r.takt_seconds)),
                work_content_sec: Some(r.total_work_content_seconds),
                theoretical_manpower: Some(r.theoretical_manpower),
                final_manpower: Some(r.final_manpower),
                max_operator_sec: Some(r.max_bucket_seconds),
                result: if r.unresolved_overload {
                    "UNRESOLVED OVERLOAD".to_string()
                } else {
                    "OK".to_string()
                },
            },
            Err(e) => SummaryRow {
                line: o.line_id.clone(),
                plan_date: o.plan_date.to_string(),
                plan_quantity: None,
                shift_minutes: None,
                takt_sec: None,
                work_content_sec: None,
                theoretical_manpower: None,
                final_manpower: None,
                max_operator_sec: None,
                result: format!("{}: {}", e.kind(), e),
            },
        })
        .collect()
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(|x| x.to_string()).unwrap_or_default()
}

pub(crate) fn allocation_to_row(r: &AllocationRow) -> Vec<String> {
    vec![
        r.line.clone(),
        r.plan_date.clone(),
        r.operator.clone(),
        opt(&r.sequence_no),
        r.activity.clone(),
        if r.sequence_no.is_some() {
            fmt_seconds(r.time_sec)
        } else {
            String::new()
        },
        fmt_seconds(r.operator_total_sec),
        r.operator_status.clone(),
    ]
}

pub(crate) fn summary_to_row(r: &SummaryRow) -> Vec<String> {
    vec![
        r.line.clone(),
        r.plan_date.clone(),
        opt(&r.plan_quantity),
        opt(&r.shift_minutes),
        opt(&r.takt_sec),
        r.work_content_sec.map(fmt_seconds).unwrap_or_default(),
        opt(&r.theoretical_manpower),
        opt(&r.final_manpower),
        r.max_operator_sec.map(fmt_seconds).unwrap_or_default(),
        r.result.clone(),
    ]
}
