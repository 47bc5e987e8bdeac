use chrono::Weekday;
use classgrid_core::models::{
    blocked::{BlockedInterval, BlockedSchedule},
    clock::TimeScale,
};
use rstest::{fixture, rstest};

#[fixture]
fn blocked() -> BlockedSchedule {
    BlockedSchedule::new()
        .with(Weekday::Mon, "18.00", "22.00")
        .with(Weekday::Mon, "09.00", "11.00")
        .with(Weekday::Tue, "06.30", "07.30")
        .with(Weekday::Fri, "07.00", "08.30")
        .with(Weekday::Fri, "17.00", "20.00")
}

#[rstest]
#[case("18.00", true)]
#[case("22.00", true)]
#[case("20.15", true)]
#[case("17.59", false)]
#[case("22.01", false)]
#[case("09.00", true)]
#[case("11.00", true)]
#[case("12.00", false)]
fn test_monday_boundaries_are_inclusive(
    blocked: BlockedSchedule,
    #[case] time: &str,
    #[case] expected: bool,
) {
    assert_eq!(blocked.is_blocked(time, Weekday::Mon, TimeScale::Decimal), expected);
    assert_eq!(blocked.is_blocked(time, Weekday::Mon, TimeScale::Clock), expected);
}

#[rstest]
#[case(Weekday::Sat)]
#[case(Weekday::Sun)]
#[case(Weekday::Wed)]
fn test_days_without_entries_are_never_blocked(blocked: BlockedSchedule, #[case] day: Weekday) {
    for time in ["00.00", "06.30", "09.00", "12.00", "18.00", "22.00", "23.45"] {
        assert!(!blocked.is_blocked(time, day, TimeScale::Decimal));
    }
}

#[rstest]
fn test_union_of_intervals(blocked: BlockedSchedule) {
    assert!(blocked.is_blocked("07.30", Weekday::Fri, TimeScale::Decimal));
    assert!(blocked.is_blocked("19.30", Weekday::Fri, TimeScale::Decimal));
    assert!(!blocked.is_blocked("12.00", Weekday::Fri, TimeScale::Decimal));
}

#[rstest]
fn test_unreadable_times_are_not_blocked(blocked: BlockedSchedule) {
    assert!(!blocked.is_blocked("evening", Weekday::Mon, TimeScale::Decimal));
    assert!(!blocked.is_blocked("", Weekday::Mon, TimeScale::Decimal));
}

#[test]
fn test_overlapping_intervals() {
    let blocked = BlockedSchedule::new()
        .with(Weekday::Thu, "18.00", "20.00")
        .with(Weekday::Thu, "19.00", "22.00");

    assert!(blocked.is_blocked("19.30", Weekday::Thu, TimeScale::Decimal));
    assert!(blocked.is_blocked("21.00", Weekday::Thu, TimeScale::Decimal));
    assert_eq!(blocked.intervals_on(Weekday::Thu).map(<[_]>::len), Some(2));
}

#[test]
fn test_interval_with_unreadable_bound() {
    let interval = BlockedInterval::new("18.00", "late");
    assert!(!interval.contains("19.00", TimeScale::Decimal));
}

#[test]
fn test_scales_disagree_on_short_minutes() {
    // Decimal reads "7.5" as 7.50, inside the window; the clock reads 7:05.
    let interval = BlockedInterval::new("07.10", "07.55");
    assert!(interval.contains("7.5", TimeScale::Decimal));
    assert!(!interval.contains("7.5", TimeScale::Clock));
}
