use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{GridError, GridResult};

pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

pub const FULL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Exact (case-sensitive) match against the full English weekday names.
pub fn from_full_name(name: &str) -> Option<Weekday> {
    FULL_WEEK.into_iter().find(|day| full_name(*day) == name)
}

/// Day a table column was labelled with.
///
/// Header labels that resolve to a weekday become `Known`; anything else is
/// kept verbatim as `Unrecognized` and never matches a day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DayLabel {
    Known(Weekday),
    Unrecognized(String),
}

impl DayLabel {
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            DayLabel::Known(day) => Some(*day),
            DayLabel::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Known(day) => f.write_str(full_name(*day)),
            DayLabel::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<DayLabel> for String {
    fn from(label: DayLabel) -> Self {
        label.to_string()
    }
}

impl From<String> for DayLabel {
    fn from(raw: String) -> Self {
        match from_full_name(&raw) {
            Some(day) => DayLabel::Known(day),
            None => DayLabel::Unrecognized(raw),
        }
    }
}

/// Which weekday buckets every time slot is created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayMode {
    Weekdays,
    #[default]
    FullWeek,
}

impl DayMode {
    pub fn days(self) -> &'static [Weekday] {
        match self {
            DayMode::Weekdays => &WEEKDAYS,
            DayMode::FullWeek => &FULL_WEEK,
        }
    }
}

impl FromStr for DayMode {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekdays" | "5" => Ok(DayMode::Weekdays),
            "full-week" | "week" | "7" => Ok(DayMode::FullWeek),
            other => Err(GridError::Validation(format!("unknown day mode `{other}`"))),
        }
    }
}

/// Lookup from header abbreviations to weekdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames {
    entries: Vec<(String, Weekday)>,
}

impl DayNames {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with_alias(mut self, label: impl Into<String>, day: Weekday) -> Self {
        let label = label.into();
        self.entries.retain(|(existing, _)| *existing != label);
        self.entries.push((label, day));
        self
    }

    /// Resolves a header label: the alias table first, then the full
    /// weekday names, otherwise the label is kept as unrecognized text.
    pub fn resolve(&self, label: &str) -> DayLabel {
        let label = label.trim();
        if let Some((_, day)) = self.entries.iter().find(|(alias, _)| alias == label) {
            return DayLabel::Known(*day);
        }
        match from_full_name(label) {
            Some(day) => DayLabel::Known(day),
            None => DayLabel::Unrecognized(label.to_string()),
        }
    }
}

impl Default for DayNames {
    fn default() -> Self {
        Self::empty()
            .with_alias("Mon", Weekday::Mon)
            .with_alias("Tue", Weekday::Tue)
            .with_alias("Wed", Weekday::Wed)
            .with_alias("Thurs", Weekday::Thu)
            .with_alias("Fri", Weekday::Fri)
            .with_alias("Sat", Weekday::Sat)
            .with_alias("Sun", Weekday::Sun)
    }
}

/// Serde helpers writing a `Weekday` as its full English name.
pub mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::full_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::from_full_name(&name).ok_or_else(|| D::Error::custom(format!("unknown weekday `{name}`")))
    }
}
