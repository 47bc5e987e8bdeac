use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GridError, GridResult};

/// Rule for turning `HH.MM` clock text into a number that can be ordered and
/// compared against session bounds and blocked intervals.
///
/// * `Decimal` reads the text as a decimal number: `"18.30"` is `18.30`.
/// * `Clock` reads hour and minute fields as integers: `"18.30"` is `18.5`
///   hours. Minutes of 60 or more are rejected.
///
/// The two agree on ordering for two-digit minute fields; they diverge for
/// texts such as `"9.5"` (decimal 9.5, clock 9:05).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    #[default]
    Decimal,
    Clock,
}

impl TimeScale {
    /// Numeric key for `text`, in hours. `None` when the text does not parse.
    pub fn key(self, text: &str) -> Option<f64> {
        let text = text.trim();
        match self {
            TimeScale::Decimal => text.parse::<f64>().ok().filter(|value| value.is_finite()),
            TimeScale::Clock => {
                let (hours, minutes) = text.split_once('.').unwrap_or((text, "0"));
                let hours = hours.parse::<u32>().ok()?;
                let minutes = minutes.parse::<u32>().ok()?;
                if minutes >= 60 {
                    return None;
                }
                Some(f64::from(hours) + f64::from(minutes) / 60.0)
            }
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeScale::Decimal => f.write_str("decimal"),
            TimeScale::Clock => f.write_str("clock"),
        }
    }
}

impl FromStr for TimeScale {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(TimeScale::Decimal),
            "clock" => Ok(TimeScale::Clock),
            other => Err(GridError::Validation(format!(
                "time scale must be `decimal` or `clock`, got `{other}`"
            ))),
        }
    }
}
