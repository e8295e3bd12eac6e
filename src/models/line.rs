use serde::Serialize;

/// Row of the line master listing.
#[derive(Debug, Clone, Serialize)]
pub struct LineSummary {
    pub id: i64,
    pub name: String,
    pub activity_count: i64,
    pub work_content_sec: f64,
    pub created_at: String,
}
