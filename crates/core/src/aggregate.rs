//! # Aggregation
//!
//! Merges the activities of every location into one list of time slots.
//!
//! 1. Each source table is parsed, unless a location filter excludes it.
//! 2. Activities are grouped by their exact time text. `"09.00"` and
//!    `"9.00"` are different slots.
//! 3. Within a slot, activities land in the bucket of their weekday.
//!    Activities for a day the slot has no bucket for are discarded.
//! 4. Slots are ordered by the numeric key of the configured time scale.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    config::ScheduleConfig,
    models::{
        activity::Activity,
        clock::TimeScale,
        location::{LocationId, LocationTable},
        time_slot::TimeSlot,
    },
    parser::parse_table,
};

/// Parses every source that passes `filter` and concatenates the results
/// in source order.
pub fn collect_activities(
    sources: &[LocationTable],
    filter: Option<&LocationId>,
    config: &ScheduleConfig,
) -> Vec<Activity> {
    sources
        .iter()
        .filter(|source| filter.is_none_or(|location| *location == source.location))
        .flat_map(|source| parse_table(&source.table, &source.location, &config.format))
        .collect()
}

/// Builds the time-ordered slot list for `sources`.
///
/// The result holds exactly one slot per distinct time text. Ordering is
/// stable, and times the scale cannot read go last in discovery order.
pub fn aggregate(
    sources: &[LocationTable],
    filter: Option<&LocationId>,
    config: &ScheduleConfig,
) -> Vec<TimeSlot> {
    let activities = collect_activities(sources, filter, config);
    let total = activities.len();

    let mut slots = group_by_time(activities, config.day_mode.days());
    sort_slots(&mut slots, config.time_scale);

    debug!(
        activities = total,
        slots = slots.len(),
        filter = filter.map(LocationId::as_str),
        "aggregated schedule"
    );

    slots
}

fn group_by_time(activities: Vec<Activity>, days: &[chrono::Weekday]) -> Vec<TimeSlot> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut slots: Vec<TimeSlot> = Vec::new();

    for activity in activities {
        let position = *index.entry(activity.time.clone()).or_insert_with(|| {
            slots.push(TimeSlot::new(activity.time.clone(), days));
            slots.len() - 1
        });

        if let Err(activity) = slots[position].try_push(activity) {
            trace!(
                time = %activity.time,
                day = %activity.day,
                class = %activity.class_name,
                location = %activity.location,
                "discarded activity without a day bucket"
            );
        }
    }

    slots
}

/// Orders slots ascending by time key; unreadable times sort last.
pub fn sort_slots(slots: &mut [TimeSlot], scale: TimeScale) {
    slots.sort_by(|a, b| compare_keys(scale.key(&a.time), scale.key(&b.time)));
}

fn compare_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
