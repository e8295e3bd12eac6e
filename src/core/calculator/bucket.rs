use crate::models::activity::Activity;

/// Activities accumulated by one operator slot during bucket-fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorLoad {
    pub activities: Vec<Activity>,
    pub total_time_sec: f64,
}

impl OperatorLoad {
    fn push(&mut self, act: &Activity) {
        self.total_time_sec += act.time_sec;
        self.activities.push(act.clone());
    }

    fn fits(&self, act: &Activity, takt_seconds: f64) -> bool {
        self.total_time_sec + act.time_sec <= takt_seconds
    }
}

/// Sequential bucket-fill.
///
/// Walks the activities once, in order. The current operator keeps taking
/// activities while its total stays within `takt_seconds`; otherwise the next
/// operator is opened. An empty operator always takes the next activity, so an
/// activity longer than takt sits alone. Once the last of `manpower` operators
/// is open it absorbs everything left, overloaded or not.
///
/// With at least as many operators as activities the fill degenerates to one
/// activity per operator.
///
/// Always returns exactly `manpower` loads (at least one); trailing loads stay
/// empty only when `manpower` exceeds the number of activities.
pub fn allocate(activities: &[Activity], manpower: usize, takt_seconds: f64) -> Vec<OperatorLoad> {
    let manpower = manpower.max(1);
    let mut loads = vec![OperatorLoad::default(); manpower];

    if manpower >= activities.len() {
        for (load, act) in loads.iter_mut().zip(activities) {
            load.push(act);
        }
        return loads;
    }

    let mut op = 0;

    for act in activities {
        let current = &loads[op];

        if !current.activities.is_empty() && !current.fits(act, takt_seconds) && op + 1 < manpower {
            op += 1;
        }

        loads[op].push(act);
    }

    loads
}

/// Largest operator total, 0 when there are no loads.
pub fn max_load(loads: &[OperatorLoad]) -> f64 {
    loads.iter().map(|l| l.total_time_sec).fold(0.0, f64::max)
}
