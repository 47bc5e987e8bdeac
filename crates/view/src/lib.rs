//! # ClassGrid View
//!
//! Turns a consolidated schedule into the data a calendar page paints:
//! a title, a location legend, and one or more sections of rows and cells.
//! Painting itself is left to whoever consumes the serialized view.
//!
//! - **Config**: environment settings for a view
//! - **Model**: the serializable view structures

/// Environment configuration for building a view
pub mod config;
/// Serializable view structures
pub mod model;

use chrono::NaiveDate;
use classgrid_core::{
    Schedule,
    models::{day::full_name, location::LocationId, time_slot::TimeSlot},
};
use classgrid_data::{Layout, Preset, TableSource};
use eyre::{Result, WrapErr};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::ViewConfig;
use crate::model::{CellView, ClassBadge, LegendEntry, RowView, ScheduleView, SectionView};

pub const MORNING_TITLE: &str = "Morning Session (Before 12:00 PM)";
pub const EVENING_TITLE: &str = "Evening Session (5:00 PM & After)";
pub const COMBINED_TITLE: &str = "All Sessions";

/// Display switches that do not change the underlying schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Mark cells inside the preset's blocked intervals
    pub show_blocked: bool,
    /// Month named in the title; only year and month are shown
    pub month: NaiveDate,
}

/// Builds the view for an already refreshed schedule.
///
/// # Arguments
///
/// * `preset` - Variant the schedule was built from; supplies layout, styles and blocked intervals
/// * `schedule` - Output of the pipeline
/// * `filter` - Location filter the schedule was built with, if any
/// * `options` - Display switches
pub fn build_view(
    preset: &Preset,
    schedule: &Schedule,
    filter: Option<&LocationId>,
    options: &ViewOptions,
) -> ScheduleView {
    let sections = match preset.layout {
        Layout::Sessions => {
            let sessions = schedule.sessions();
            vec![
                section(MORNING_TITLE, &sessions.morning, None, preset, schedule, options),
                section(EVENING_TITLE, &sessions.evening, None, preset, schedule, options),
            ]
        }
        Layout::Combined => {
            let combined = schedule.combined();
            vec![section(
                COMBINED_TITLE,
                &combined.slots,
                combined.divider_at,
                preset,
                schedule,
                options,
            )]
        }
    };

    ScheduleView {
        title: format!("Class Schedule {}", options.month.format("%B %Y")),
        variant: preset.variant.to_string(),
        legend: preset
            .locations
            .iter()
            .map(|location| LegendEntry {
                location: location.clone(),
                style: style_for(preset, location),
            })
            .collect(),
        filter_options: preset.filter_options().to_vec(),
        active_filter: filter.cloned(),
        show_blocked: options.show_blocked,
        sections,
    }
}

fn section(
    title: &str,
    slots: &[&TimeSlot],
    divider_at: Option<usize>,
    preset: &Preset,
    schedule: &Schedule,
    options: &ViewOptions,
) -> SectionView {
    let rows: Vec<RowView> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| RowView {
            time: slot.time.clone(),
            divider_before: divider_at == Some(index),
            cells: slot
                .classes()
                .iter()
                .map(|bucket| CellView {
                    day: full_name(bucket.day).to_string(),
                    blocked: options.show_blocked
                        && schedule.is_blocked(&preset.blocked, &slot.time, bucket.day),
                    classes: bucket
                        .activities
                        .iter()
                        .map(|activity| ClassBadge {
                            class_name: activity.class_name.clone(),
                            location: activity.location.clone(),
                            style: style_for(preset, &activity.location),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let empty = rows.is_empty();
    SectionView {
        title: if empty {
            format!("{title} - No Classes Scheduled")
        } else {
            title.to_string()
        },
        empty,
        days: schedule
            .days()
            .iter()
            .map(|day| full_name(*day).to_string())
            .collect(),
        rows,
    }
}

fn style_for(preset: &Preset, location: &LocationId) -> String {
    preset
        .styles
        .style_for(location)
        .unwrap_or_default()
        .to_string()
}

/// Loads the configured variant from `source` and builds its view.
///
/// # Errors
///
/// * The location filter is not allowed or unknown for the variant
/// * The source fails or yields a location without a style
pub fn load_view<S: TableSource + ?Sized>(config: &ViewConfig, source: &S) -> Result<ScheduleView> {
    let mut preset = Preset::for_variant(config.variant)
        .wrap_err_with(|| format!("Failed to prepare variant `{}`", config.variant))?;
    preset.config.time_scale = config.time_scale;

    let filter = preset
        .resolve_filter(config.location.as_deref())
        .wrap_err("Invalid location filter")?;

    let schedule = preset
        .load(source, filter.as_ref())
        .wrap_err("Failed to load schedule")?;

    info!(
        variant = %preset.variant,
        slots = schedule.slots.len(),
        show_blocked = config.show_blocked,
        "built schedule view"
    );

    Ok(build_view(
        &preset,
        &schedule,
        filter.as_ref(),
        &ViewOptions {
            show_blocked: config.show_blocked,
            month: config.month,
        },
    ))
}

/// Installs a global tracing subscriber writing to stderr.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
