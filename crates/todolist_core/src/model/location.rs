//! Location value object for items tied to a place.

use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Named place with an optional coordinate.
///
/// Equality is structural over both fields: two locations match only
/// when their names match and their coordinates are both absent or
/// component-wise equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

impl Location {
    /// Creates a location with no coordinate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinate: None,
        }
    }

    /// Creates a location pinned to a coordinate.
    pub fn with_coordinate(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate: Some(coordinate),
        }
    }
}
