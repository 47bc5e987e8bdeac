//! # Table Parser
//!
//! Turns one location's delimited timetable into a flat list of activities.
//!
//! ```text
//! Time,Mon,Tue,Wed
//! 07.30,,Hatha Yoga,
//! 18.00,Zumba,,Pilates
//! ```
//!
//! The first non-blank line is the header; its first field is ignored and
//! the rest label the day columns. Each later line starts with the `HH.MM`
//! time followed by one class name per day column. Parsing never fails:
//! blank lines, blank cells and ragged rows simply produce fewer activities.

use tracing::debug;

use crate::{
    config::TableFormat,
    models::{activity::Activity, day::DayLabel, location::LocationId},
};

/// Parses `table` into activities tagged with `location`.
///
/// Activities come out in reading order: top to bottom, then left to right
/// within a row. Cells beyond the shorter of the row and the header are
/// ignored.
pub fn parse_table(table: &str, location: &LocationId, format: &TableFormat) -> Vec<Activity> {
    let mut lines = table
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let Some(header) = lines.next() else {
        debug!(%location, "empty table");
        return Vec::new();
    };

    let days: Vec<DayLabel> = header
        .split(format.delimiter)
        .skip(1)
        .map(|label| format.day_names.resolve(label))
        .collect();

    let mut activities = Vec::new();

    for line in lines {
        let mut fields = line.split(format.delimiter);
        let Some(time) = fields.next().map(str::trim) else {
            continue;
        };

        for (day, cell) in days.iter().zip(fields) {
            let class_name = cell.trim();
            if class_name.is_empty() {
                continue;
            }

            activities.push(Activity {
                time: time.to_string(),
                day: day.clone(),
                class_name: class_name.to_string(),
                location: location.clone(),
            });
        }
    }

    debug!(%location, count = activities.len(), "parsed location table");

    activities
}
