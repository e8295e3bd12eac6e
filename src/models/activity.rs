use crate::errors::EngineError;
use serde::Serialize;

/// One unit of work on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub sequence_no: i64, // ⇔ activities.seq_no
    pub text: String,     // ⇔ activities.text
    pub time_sec: f64,    // ⇔ activities.time_sec (standard time, > 0)
}

impl Activity {
    pub fn new(sequence_no: i64, text: impl Into<String>, time_sec: f64) -> Self {
        Self {
            sequence_no,
            text: text.into(),
            time_sec,
        }
    }
}

/// Immutable snapshot of a line's activities, ordered by `sequence_no`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineConfig {
    pub line_id: String,
    activities: Vec<Activity>,
}

impl LineConfig {
    /// Build the canonical ordered sequence.
    ///
    /// Activities are sorted by `sequence_no`; duplicates and non-positive
    /// (or non-finite) standard times are rejected. An empty list is accepted
    /// here and reported as `EmptyLine` when the line is planned.
    pub fn new(line_id: impl Into<String>, mut activities: Vec<Activity>) -> Result<Self, EngineError> {
        let line_id = line_id.into();

        activities.sort_by_key(|a| a.sequence_no);

        for w in activities.windows(2) {
            if w[0].sequence_no == w[1].sequence_no {
                return Err(EngineError::DuplicateSequence {
                    line_id,
                    sequence_no: w[1].sequence_no,
                });
            }
        }

        if let Some(bad) = activities
            .iter()
            .find(|a| !a.time_sec.is_finite() || a.time_sec <= 0.0)
        {
            return Err(EngineError::InvalidActivityTime {
                line_id,
                sequence_no: bad.sequence_no,
            });
        }

        Ok(Self {
            line_id,
            activities,
        })
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
