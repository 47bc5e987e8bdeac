//! # Session Partitioning
//!
//! Splits an ordered slot list into morning and evening sessions, or keeps it
//! whole with a marker where the evening starts.

use serde::{Deserialize, Serialize};

use crate::models::{clock::TimeScale, time_slot::TimeSlot};

/// Session boundaries, in the hours of the active time scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionBounds {
    /// Slots strictly before this belong to the morning.
    pub morning_before: f64,
    /// Slots at or after this belong to the evening.
    pub evening_from: f64,
}

impl Default for SessionBounds {
    fn default() -> Self {
        Self {
            morning_before: 12.0,
            evening_from: 17.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sessions<'a> {
    pub morning: Vec<&'a TimeSlot>,
    pub evening: Vec<&'a TimeSlot>,
}

/// All slots in one list, with the index of the first evening slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedView<'a> {
    pub slots: Vec<&'a TimeSlot>,
    pub divider_at: Option<usize>,
}

/// Splits `slots` into morning and evening, preserving order.
///
/// Slots between the bounds (early afternoon) and slots whose time the
/// scale cannot read appear in neither session.
pub fn partition(slots: &[TimeSlot], bounds: SessionBounds, scale: TimeScale) -> Sessions<'_> {
    let keyed: Vec<(f64, &TimeSlot)> = slots
        .iter()
        .filter_map(|slot| scale.key(&slot.time).map(|key| (key, slot)))
        .collect();

    Sessions {
        morning: keyed
            .iter()
            .filter(|(key, _)| *key < bounds.morning_before)
            .map(|(_, slot)| *slot)
            .collect(),
        evening: keyed
            .iter()
            .filter(|(key, _)| *key >= bounds.evening_from)
            .map(|(_, slot)| *slot)
            .collect(),
    }
}

/// Keeps every slot and marks the first one at or after the evening bound.
pub fn combine(slots: &[TimeSlot], bounds: SessionBounds, scale: TimeScale) -> CombinedView<'_> {
    let divider_at = slots.iter().position(|slot| {
        scale
            .key(&slot.time)
            .is_some_and(|key| key >= bounds.evening_from)
    });

    CombinedView {
        slots: slots.iter().collect(),
        divider_at,
    }
}
