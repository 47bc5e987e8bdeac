//! # Deployment Variants
//!
//! The schedule grid ships in four flavours that share one pipeline and
//! differ only in configuration:
//!
//! | variant | locations | days | layout | location filter |
//! |---|---|---|---|---|
//! | `classic` | all four | 7 | morning / evening | no |
//! | `weekdays` | MOI, BellaTerra, Sedayu | 5 | morning / evening | no |
//! | `filterable` | all four | 7 | morning / evening | yes |
//! | `combined` | all four | 7 | single grid | yes |

use std::fmt;
use std::str::FromStr;

use classgrid_core::{
    GridError, GridResult, Schedule, ScheduleConfig,
    config::validate_sources,
    models::{
        blocked::BlockedSchedule,
        day::DayMode,
        location::{LocationId, LocationStyles, LocationTable},
    },
    refresh,
};
use tracing::debug;

use crate::{
    source::TableSource,
    tables::{BLOCKED, LOCATIONS},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Classic,
    Weekdays,
    Filterable,
    Combined,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Weekdays,
        Variant::Filterable,
        Variant::Combined,
    ];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Classic => "classic",
            Variant::Weekdays => "weekdays",
            Variant::Filterable => "filterable",
            Variant::Combined => "combined",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.to_string() == wanted)
            .ok_or_else(|| GridError::UnknownVariant(s.trim().to_string()))
    }
}

/// How the slots are laid out for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Separate morning and evening grids; early afternoon is not shown.
    Sessions,
    /// One grid with a divider before the first evening slot.
    Combined,
}

/// Everything one variant needs to build its schedule.
#[derive(Debug, Clone)]
pub struct Preset {
    pub variant: Variant,
    /// Included locations, in display order.
    pub locations: Vec<LocationId>,
    pub styles: LocationStyles,
    pub blocked: BlockedSchedule,
    pub config: ScheduleConfig,
    pub layout: Layout,
    pub filter_enabled: bool,
}

impl Preset {
    pub fn for_variant(variant: Variant) -> GridResult<Self> {
        let included: &[&str] = match variant {
            Variant::Weekdays => &["MOI", "BellaTerra", "Sedayu"],
            Variant::Classic | Variant::Filterable | Variant::Combined => {
                &["MOI", "BellaTerra", "Sedayu", "SunterMall"]
            }
        };

        let mut locations = Vec::with_capacity(included.len());
        let mut styles = LocationStyles::new();
        for (id, _, style) in LOCATIONS.iter().filter(|(id, _, _)| included.contains(id)) {
            let location = LocationId::new(*id)?;
            styles.insert(location.clone(), *style);
            locations.push(location);
        }

        let blocked = BLOCKED
            .iter()
            .fold(BlockedSchedule::new(), |blocked, (day, start, end)| {
                blocked.with(*day, start, end)
            });

        let day_mode = match variant {
            Variant::Weekdays => DayMode::Weekdays,
            _ => DayMode::FullWeek,
        };

        Ok(Self {
            variant,
            locations,
            styles,
            blocked,
            config: ScheduleConfig::default().with_day_mode(day_mode),
            layout: match variant {
                Variant::Combined => Layout::Combined,
                _ => Layout::Sessions,
            },
            filter_enabled: matches!(variant, Variant::Filterable | Variant::Combined),
        })
    }

    /// Locations a filter may name; empty when filtering is disabled.
    pub fn filter_options(&self) -> &[LocationId] {
        if self.filter_enabled {
            &self.locations
        } else {
            &[]
        }
    }

    /// Turns a raw filter value into a location of this preset.
    pub fn resolve_filter(&self, raw: Option<&str>) -> GridResult<Option<LocationId>> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };
        if !self.filter_enabled {
            return Err(GridError::Validation(format!(
                "variant `{}` does not support a location filter",
                self.variant
            )));
        }

        let location = LocationId::new(raw)?;
        if !self.locations.contains(&location) {
            return Err(GridError::UnknownLocation(location.to_string()));
        }
        Ok(Some(location))
    }

    /// Keeps the tables of included locations, in preset order.
    pub fn select(&self, tables: Vec<LocationTable>) -> Vec<LocationTable> {
        let mut selected: Vec<LocationTable> = tables
            .into_iter()
            .filter(|table| self.locations.contains(&table.location))
            .collect();
        selected.sort_by_key(|table| {
            self.locations
                .iter()
                .position(|location| *location == table.location)
        });
        selected
    }

    /// Fetches, selects and validates the sources, then runs the pipeline.
    pub fn load<S: TableSource + ?Sized>(
        &self,
        source: &S,
        filter: Option<&LocationId>,
    ) -> GridResult<Schedule> {
        let sources = self.select(source.tables()?);
        validate_sources(&sources, &self.styles, filter)?;

        debug!(
            variant = %self.variant,
            sources = sources.len(),
            filter = filter.map(LocationId::as_str),
            "refreshing schedule"
        );

        Ok(refresh(&sources, filter, &self.config))
    }
}
