mod test_utils;

use classgrid_core::{
    ScheduleConfig,
    aggregate::aggregate,
    models::{clock::TimeScale, time_slot::TimeSlot},
    partition::{SessionBounds, combine, partition},
    refresh,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utils::{sample_sources, table};

fn times<'a>(slots: &[&'a TimeSlot]) -> Vec<&'a str> {
    slots.iter().map(|slot| slot.time.as_str()).collect()
}

#[test]
fn test_sample_sessions() {
    let slots = aggregate(&sample_sources(), None, &ScheduleConfig::default());
    let sessions = partition(&slots, SessionBounds::default(), TimeScale::Decimal);

    assert_eq!(times(&sessions.morning), vec!["07.30", "08.00", "09.00", "10.00"]);
    assert_eq!(
        times(&sessions.evening),
        vec!["17.00", "18.00", "18.15", "18.30", "19.15", "19.30"]
    );
}

#[rstest]
#[case("06.00", true, false)]
#[case("11.45", true, false)]
#[case("12.00", false, false)]
#[case("14.30", false, false)]
#[case("16.59", false, false)]
#[case("17.00", false, true)]
#[case("21.15", false, true)]
#[case("late", false, false)]
fn test_partition_membership(
    #[case] time: &str,
    #[case] in_morning: bool,
    #[case] in_evening: bool,
) {
    let sources = vec![table("MOI", &format!("Time,Mon\n{time},Zumba"))];
    let slots = aggregate(&sources, None, &ScheduleConfig::default());
    let sessions = partition(&slots, SessionBounds::default(), TimeScale::Decimal);

    assert_eq!(sessions.morning.len() == 1, in_morning);
    assert_eq!(sessions.evening.len() == 1, in_evening);
}

#[test]
fn test_sessions_are_disjoint() {
    let slots = aggregate(&sample_sources(), None, &ScheduleConfig::default());
    let sessions = partition(&slots, SessionBounds::default(), TimeScale::Decimal);

    for slot in &sessions.morning {
        assert!(!sessions.evening.iter().any(|other| other.time == slot.time));
    }
}

#[test]
fn test_clock_scale_moves_half_past_eleven() {
    // "11.75" is not a clock time, so the clock scale drops it from both sessions.
    let sources = vec![table("MOI", "Time,Mon\n11.30,Zumba\n11.75,Yoga")];
    let slots = aggregate(&sources, None, &ScheduleConfig::default());

    let decimal = partition(&slots, SessionBounds::default(), TimeScale::Decimal);
    let clock = partition(&slots, SessionBounds::default(), TimeScale::Clock);

    assert_eq!(times(&decimal.morning), vec!["11.30", "11.75"]);
    assert_eq!(times(&clock.morning), vec!["11.30"]);
}

#[test]
fn test_custom_bounds() {
    let slots = aggregate(&sample_sources(), None, &ScheduleConfig::default());
    let bounds = SessionBounds {
        morning_before: 9.0,
        evening_from: 19.0,
    };
    let sessions = partition(&slots, bounds, TimeScale::Decimal);

    assert_eq!(times(&sessions.morning), vec!["07.30", "08.00"]);
    assert_eq!(times(&sessions.evening), vec!["19.15", "19.30"]);
}

#[test]
fn test_combined_view_marks_first_evening_slot() {
    let slots = aggregate(&sample_sources(), None, &ScheduleConfig::default());
    let combined = combine(&slots, SessionBounds::default(), TimeScale::Decimal);

    assert_eq!(combined.slots.len(), slots.len());
    assert_eq!(combined.divider_at, Some(4));
    assert_eq!(combined.slots[4].time, "17.00");
}

#[test]
fn test_combined_view_without_evening() {
    let sources = vec![table("MOI", "Time,Mon\n08.00,Zumba\n13.00,Yoga")];
    let schedule = refresh(&sources, None, &ScheduleConfig::default());

    assert_eq!(schedule.combined().divider_at, None);
    assert_eq!(schedule.sessions().evening.len(), 0);
}
