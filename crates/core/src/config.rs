//! # Pipeline Configuration
//!
//! Everything that varies between deployments of the schedule grid is passed
//! in explicitly through these structs rather than read from globals, so
//! several configurations can live side by side.

use crate::{
    errors::{GridError, GridResult},
    models::{
        clock::TimeScale,
        day::{DayMode, DayNames},
        location::{LocationId, LocationStyles, LocationTable},
    },
    partition::SessionBounds,
};

/// How raw location tables are split and how their headers are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// Field separator; there is no quoting or escaping.
    pub delimiter: char,
    /// Header label to weekday lookup.
    pub day_names: DayNames,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            day_names: DayNames::default(),
        }
    }
}

/// Settings for one run of parse, aggregate and partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleConfig {
    pub format: TableFormat,
    /// Weekday buckets each time slot is created with.
    pub day_mode: DayMode,
    /// Rule used for ordering, session bounds and blocked intervals.
    pub time_scale: TimeScale,
    pub bounds: SessionBounds,
}

impl ScheduleConfig {
    pub fn with_day_mode(mut self, day_mode: DayMode) -> Self {
        self.day_mode = day_mode;
        self
    }

    pub fn with_time_scale(mut self, time_scale: TimeScale) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Checks that every source location has a display style, that no location
/// is listed twice, and that a filter names one of the sources.
pub fn validate_sources(
    sources: &[LocationTable],
    styles: &LocationStyles,
    filter: Option<&LocationId>,
) -> GridResult<()> {
    for (index, source) in sources.iter().enumerate() {
        if !styles.contains(&source.location) {
            return Err(GridError::Validation(format!(
                "location `{}` has no display style",
                source.location
            )));
        }
        if sources[..index]
            .iter()
            .any(|earlier| earlier.location == source.location)
        {
            return Err(GridError::Validation(format!(
                "location `{}` is listed more than once",
                source.location
            )));
        }
    }

    if let Some(filter) = filter {
        if !sources.iter().any(|source| source.location == *filter) {
            return Err(GridError::UnknownLocation(filter.to_string()));
        }
    }

    Ok(())
}
