use super::bucket::{self, OperatorLoad};
use crate::models::activity::Activity;
use tracing::{debug, instrument};

/// ceil(work_content / takt), never below 1.
pub fn theoretical_manpower(total_work_content: f64, takt_seconds: f64) -> usize {
    let raw = (total_work_content / takt_seconds).ceil();
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    }
}

/// Decision taken after one allocation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// No operator exceeds takt.
    Balanced,
    /// One operator per activity and still overloaded.
    Exhausted,
    /// Try again with this many operators.
    Retry(usize),
}

/// Bounded search over candidate manpower.
///
/// The candidate starts at the theoretical manpower (clamped to
/// `1..=activity_count`) and only ever grows by one, up to `activity_count`.
#[derive(Debug, Clone)]
pub struct ManpowerSearch {
    candidate: usize,
    ceiling: usize,
    takt_seconds: f64,
}

impl ManpowerSearch {
    pub fn new(theoretical: usize, activity_count: usize, takt_seconds: f64) -> Self {
        let ceiling = activity_count.max(1);
        Self {
            candidate: theoretical.clamp(1, ceiling),
            ceiling,
            takt_seconds,
        }
    }

    pub fn candidate(&self) -> usize {
        self.candidate
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Feed the max operator time obtained with the current candidate.
    pub fn advance(&mut self, max_load: f64) -> SearchStep {
        if max_load <= self.takt_seconds {
            return SearchStep::Balanced;
        }
        if self.candidate >= self.ceiling {
            return SearchStep::Exhausted;
        }
        self.candidate += 1;
        SearchStep::Retry(self.candidate)
    }
}

#[derive(Debug, Clone)]
pub struct ManpowerSolution {
    pub manpower: usize,
    pub loads: Vec<OperatorLoad>,
    pub unresolved_overload: bool,
    /// Candidates tried, in order.
    pub attempts: Vec<usize>,
}

/// Smallest candidate (from the theoretical value upward) whose bucket-fill
/// keeps every operator within takt, or one operator per activity.
#[instrument(skip(activities), fields(activity_count = activities.len()))]
pub fn solve(activities: &[Activity], takt_seconds: f64, total_work_content: f64) -> ManpowerSolution {
    let theoretical = theoretical_manpower(total_work_content, takt_seconds);
    let mut search = ManpowerSearch::new(theoretical, activities.len(), takt_seconds);
    let mut attempts = Vec::new();

    loop {
        let manpower = search.candidate();
        let loads = bucket::allocate(activities, manpower, takt_seconds);
        let max = bucket::max_load(&loads);
        attempts.push(manpower);

        debug!(manpower, max_load = max, "bucket-fill attempt");

        match search.advance(max) {
            SearchStep::Retry(_) => continue,
            step => {
                return ManpowerSolution {
                    manpower,
                    loads,
                    unresolved_overload: step == SearchStep::Exhausted,
                    attempts,
                };
            }
        }
    }
}
