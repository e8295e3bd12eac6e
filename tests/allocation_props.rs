use chrono::NaiveDate;
use laps::{Activity, LineConfig, PlanEntry, allocate_line};
use proptest::prelude::*;

fn build_line(times: &[u32]) -> LineConfig {
    let acts = times
        .iter()
        .enumerate()
        .map(|(i, t)| Activity::new(i as i64 + 1, format!("a{i}"), *t as f64))
        .collect();
    LineConfig::new("PROP", acts).unwrap()
}

proptest! {
    #[test]
    fn buckets_reproduce_the_activity_sequence(
        times in prop::collection::vec(1u32..300, 1..30),
        shift in 60i64..600,
        qty in 1i64..500,
    ) {
        let line = build_line(&times);
        let entry = PlanEntry::new("PROP", NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), shift, qty);
        let r = allocate_line(&entry, &line).unwrap();

        let flattened: Vec<Activity> = r
            .buckets
            .iter()
            .flat_map(|b| b.activities.iter().cloned())
            .collect();
        prop_assert_eq!(flattened.as_slice(), line.activities());

        prop_assert_eq!(r.buckets.len(), r.final_manpower);
        prop_assert!(r.final_manpower >= 1);
        prop_assert!(r.final_manpower <= line.len());
        prop_assert!(r.final_manpower >= r.theoretical_manpower.min(line.len()));

        for (i, b) in r.buckets.iter().enumerate() {
            prop_assert_eq!(b.operator_index, i + 1);
        }

        if r.final_manpower == line.len() {
            prop_assert!(r.buckets.iter().all(|b| b.activities.len() == 1));
        }

        if r.unresolved_overload {
            prop_assert_eq!(r.final_manpower, line.len());
            prop_assert!(r.max_bucket_seconds > r.takt_seconds);
        } else {
            prop_assert!(r.buckets.iter().all(|b| b.total_time_sec <= r.takt_seconds));
        }
    }
}
