use chrono::Weekday;
use serde::Serialize;

use crate::{
    aggregate::aggregate,
    config::ScheduleConfig,
    models::{
        blocked::BlockedSchedule,
        location::{LocationId, LocationTable},
        time_slot::TimeSlot,
    },
    partition::{CombinedView, Sessions, combine, partition},
};

/// Result of one refresh: the ordered slots plus the settings they were
/// built with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub slots: Vec<TimeSlot>,
    #[serde(skip)]
    config: ScheduleConfig,
}

impl Schedule {
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn days(&self) -> &'static [Weekday] {
        self.config.day_mode.days()
    }

    pub fn sessions(&self) -> Sessions<'_> {
        partition(&self.slots, self.config.bounds, self.config.time_scale)
    }

    pub fn combined(&self) -> CombinedView<'_> {
        combine(&self.slots, self.config.bounds, self.config.time_scale)
    }

    pub fn is_blocked(&self, blocked: &BlockedSchedule, time: &str, day: Weekday) -> bool {
        blocked.is_blocked(time, day, self.config.time_scale)
    }
}

/// Runs the whole pipeline from scratch. Nothing from a previous refresh is
/// reused.
pub fn refresh(
    sources: &[LocationTable],
    filter: Option<&LocationId>,
    config: &ScheduleConfig,
) -> Schedule {
    Schedule {
        slots: aggregate(sources, filter, config),
        config: config.clone(),
    }
}
