use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::day::weekday_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayClasses {
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    pub activities: Vec<Activity>,
}

/// Every activity sharing one clock time, bucketed by weekday.
///
/// The day buckets are fixed when the slot is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    classes: Vec<DayClasses>,
}

impl TimeSlot {
    pub fn new(time: impl Into<String>, days: &[Weekday]) -> Self {
        Self {
            time: time.into(),
            classes: days
                .iter()
                .map(|day| DayClasses {
                    day: *day,
                    activities: Vec::new(),
                })
                .collect(),
        }
    }

    /// Appends `activity` to its day's bucket, handing it back when the
    /// slot has no bucket for that day.
    pub fn try_push(&mut self, activity: Activity) -> Result<(), Activity> {
        let Some(day) = activity.day.weekday() else {
            return Err(activity);
        };
        match self.classes.iter_mut().find(|bucket| bucket.day == day) {
            Some(bucket) => {
                bucket.activities.push(activity);
                Ok(())
            }
            None => Err(activity),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.classes.iter().map(|bucket| bucket.day)
    }

    pub fn classes(&self) -> &[DayClasses] {
        &self.classes
    }

    /// Activities on `day`; `None` when the slot has no bucket for it.
    pub fn classes_on(&self, day: Weekday) -> Option<&[Activity]> {
        self.classes
            .iter()
            .find(|bucket| bucket.day == day)
            .map(|bucket| bucket.activities.as_slice())
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.classes.iter().flat_map(|bucket| bucket.activities.iter())
    }

    pub fn activity_count(&self) -> usize {
        self.classes.iter().map(|bucket| bucket.activities.len()).sum()
    }
}
