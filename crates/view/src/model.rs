use classgrid_core::models::location::LocationId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub title: String,
    pub variant: String,
    pub legend: Vec<LegendEntry>,
    pub filter_options: Vec<LocationId>,
    pub active_filter: Option<LocationId>,
    pub show_blocked: bool,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub location: LocationId,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    pub title: String,
    pub empty: bool,
    pub days: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub time: String,
    pub divider_before: bool,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub day: String,
    pub blocked: bool,
    pub classes: Vec<ClassBadge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBadge {
    pub class_name: String,
    pub location: LocationId,
    pub style: String,
}
