use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GridError, GridResult};

/// Identifier of a gym location, e.g. `BellaTerra`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> GridResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GridError::Validation(
                "location identifier must not be empty".to_string(),
            ));
        }
        if id.trim() != id {
            return Err(GridError::Validation(format!(
                "location identifier `{id}` has surrounding whitespace"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationId {
    type Error = GridError;

    fn try_from(id: String) -> GridResult<Self> {
        Self::new(id)
    }
}

impl TryFrom<&str> for LocationId {
    type Error = GridError;

    fn try_from(id: &str) -> GridResult<Self> {
        Self::new(id)
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

/// One location's raw schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTable {
    pub location: LocationId,
    pub table: String,
}

impl LocationTable {
    pub fn new(location: LocationId, table: impl Into<String>) -> Self {
        Self {
            location,
            table: table.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationStyle {
    pub location: LocationId,
    pub style: String,
}

/// Display style token per location, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationStyles {
    entries: Vec<LocationStyle>,
}

impl LocationStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style for `location`, replacing any previous one.
    pub fn insert(&mut self, location: LocationId, style: impl Into<String>) {
        let style = style.into();
        match self.entries.iter_mut().find(|entry| entry.location == location) {
            Some(entry) => entry.style = style,
            None => self.entries.push(LocationStyle { location, style }),
        }
    }

    pub fn with(mut self, location: LocationId, style: impl Into<String>) -> Self {
        self.insert(location, style);
        self
    }

    pub fn style_for(&self, location: &LocationId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.location == *location)
            .map(|entry| entry.style.as_str())
    }

    pub fn contains(&self, location: &LocationId) -> bool {
        self.style_for(location).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationStyle> {
        self.entries.iter()
    }
}
