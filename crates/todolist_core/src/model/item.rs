//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical item record shared by the store and list layers.
//! - Validate title content at construction and deserialization.
//!
//! # Invariants
//! - `title` is non-blank after trimming, always.
//! - Equality is structural over all fields; the store keeps equal
//!   duplicates distinct by position, not by identity.

use crate::model::location::Location;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for item field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "item title must not be blank"),
        }
    }
}

impl Error for ItemValidationError {}

/// One to-do entry.
///
/// Optional fields default to `None`; only the title is mandatory. The
/// due timestamp is unix epoch seconds so callers own their own
/// human-facing date formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemWire")]
pub struct ToDoItem {
    pub title: String,
    pub description: Option<String>,
    /// Unix epoch seconds.
    pub timestamp: Option<i64>,
    pub location: Option<Location>,
}

impl ToDoItem {
    /// Creates an item carrying only a title.
    ///
    /// # Errors
    /// - `ItemValidationError::BlankTitle` when the title trims to empty.
    pub fn new(title: impl Into<String>) -> Result<Self, ItemValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ItemValidationError::BlankTitle);
        }
        Ok(Self {
            title,
            description: None,
            timestamp: None,
            location: None,
        })
    }

    /// Re-checks field invariants on an existing item.
    ///
    /// Deserialization routes through this, so wire input cannot smuggle
    /// in a blank title.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Unvalidated wire shape backing `ToDoItem` deserialization.
#[derive(Deserialize)]
struct ItemWire {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    location: Option<Location>,
}

impl TryFrom<ItemWire> for ToDoItem {
    type Error = ItemValidationError;

    fn try_from(wire: ItemWire) -> Result<Self, Self::Error> {
        let item = Self {
            title: wire.title,
            description: wire.description,
            timestamp: wire.timestamp,
            location: wire.location,
        };
        item.validate()?;
        Ok(item)
    }
}
