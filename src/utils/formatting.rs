//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Seconds with at most two decimals, trailing zeros dropped (`140`, `86.4`).
pub fn fmt_seconds(secs: f64) -> String {
    let s = format!("{:.2}", secs);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Takt time rounded to two decimals, as shown on the plan sheet.
pub fn fmt_takt(takt_seconds: f64) -> String {
    format!("{:.2}", takt_seconds)
}

/// Seconds as `MMm SSs` for long durations (`1h 05m` beyond an hour).
pub fn secs2readable(secs: i64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{}h {:02}m", h, m)
    } else {
        format!("{:02}m {:02}s", m, s)
    }
}
