use serde::{Deserialize, Serialize};

use super::day::DayLabel;
use super::location::LocationId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub day: DayLabel,
    pub class_name: String,
    pub location: LocationId,
}
