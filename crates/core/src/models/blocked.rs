use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::clock::TimeScale;
use super::day::weekday_name;

/// Inclusive `[start, end]` window of unavailable time, as `HH.MM` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedInterval {
    pub start: String,
    pub end: String,
}

impl BlockedInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, time: &str, scale: TimeScale) -> bool {
        match (scale.key(time), scale.key(&self.start), scale.key(&self.end)) {
            (Some(time), Some(start), Some(end)) => start <= time && time <= end,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDay {
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    pub intervals: Vec<BlockedInterval>,
}

/// Blocked intervals per weekday. A day may carry several overlapping
/// intervals; a time is blocked when any of them contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedSchedule {
    days: Vec<BlockedDay>,
}

impl BlockedSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: Weekday, interval: BlockedInterval) {
        match self.days.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.intervals.push(interval),
            None => self.days.push(BlockedDay {
                day,
                intervals: vec![interval],
            }),
        }
    }

    pub fn with(mut self, day: Weekday, start: &str, end: &str) -> Self {
        self.add(day, BlockedInterval::new(start, end));
        self
    }

    pub fn intervals_on(&self, day: Weekday) -> Option<&[BlockedInterval]> {
        self.days
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.intervals.as_slice())
    }

    pub fn is_blocked(&self, time: &str, day: Weekday, scale: TimeScale) -> bool {
        self.intervals_on(day)
            .is_some_and(|intervals| intervals.iter().any(|interval| interval.contains(time, scale)))
    }
}
