//! # View Configuration Module
//!
//! Loads the settings of the schedule view from environment variables,
//! falling back to defaults where a variable is missing.
//!
//! ## Environment Variables
//!
//! - `CLASSGRID_VARIANT`: `classic`, `weekdays`, `filterable` or `combined` (default: `classic`)
//! - `CLASSGRID_LOCATION`: location filter, for variants that support one
//! - `CLASSGRID_SHOW_BLOCKED`: mark blocked cells (default: `false`)
//! - `CLASSGRID_TIME_SCALE`: `decimal` or `clock` (default: `decimal`)
//! - `CLASSGRID_MONTH`: `YYYY-MM` shown in the title (default: current month)
//! - `LOG_LEVEL`: logging level (default: `info`)

use std::env;

use chrono::{Datelike, Local, NaiveDate};
use classgrid_core::models::clock::TimeScale;
use classgrid_data::Variant;
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// Settings for building one schedule view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Which deployment variant to build
    pub variant: Variant,

    /// Raw location filter, checked against the variant when the view is built
    pub location: Option<String>,

    /// Whether blocked cells are marked
    pub show_blocked: bool,

    /// Rule for reading `HH.MM` times
    pub time_scale: TimeScale,

    /// First day of the month named in the title
    pub month: NaiveDate,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            location: None,
            show_blocked: false,
            time_scale: TimeScale::default(),
            month: first_of_month(Local::now().date_naive()),
            log_level: Level::INFO,
        }
    }
}

impl ViewConfig {
    /// Creates a new ViewConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let variant = match lookup("CLASSGRID_VARIANT") {
            Some(raw) => raw
                .parse::<Variant>()
                .wrap_err("Invalid CLASSGRID_VARIANT value")?,
            None => defaults.variant,
        };

        let location = lookup("CLASSGRID_LOCATION")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());

        let show_blocked = match lookup("CLASSGRID_SHOW_BLOCKED") {
            Some(raw) => parse_flag(&raw).wrap_err("Invalid CLASSGRID_SHOW_BLOCKED value")?,
            None => defaults.show_blocked,
        };

        let time_scale = match lookup("CLASSGRID_TIME_SCALE") {
            Some(raw) => raw
                .parse::<TimeScale>()
                .wrap_err("Invalid CLASSGRID_TIME_SCALE value")?,
            None => defaults.time_scale,
        };

        let month = match lookup("CLASSGRID_MONTH") {
            Some(raw) => NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
                .wrap_err("Invalid CLASSGRID_MONTH value, expected YYYY-MM")?,
            None => defaults.month,
        };

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            variant,
            location,
            show_blocked,
            time_scale,
            month,
            log_level,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(eyre!("expected a boolean, got `{other}`")),
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
