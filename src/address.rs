//! Address records and the request shapes built around them
//!
//! An address is a named coordinate pair. The `longitude`/`latitude` names
//! follow the stored columns as-is; the seeded data keeps the values in the
//! order the columns were first populated with.

use serde::{Deserialize, Serialize};

/// A named coordinate pair stored persistently.
///
/// Field order matches the JSON shape clients already consume:
/// `longitude`, `latitude`, `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub longitude: f64,
    pub latitude: f64,
    pub name: String,
}

impl Address {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            name: name.into(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    /// Squared Euclidean distance to `origin`, treating both axes as plain
    /// coordinates.
    pub fn squared_distance_to(&self, origin: &Coordinates) -> f64 {
        let dx = self.longitude - origin.longitude;
        let dy = self.latitude - origin.latitude;
        dx * dx + dy * dy
    }
}

/// Coordinate pair without a name (body of an update).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// Origin and radius of a range query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

impl RangeQuery {
    pub fn origin(&self) -> Coordinates {
        Coordinates::new(self.longitude, self.latitude)
    }

    /// Inclusive membership test, the same predicate the store evaluates in SQL.
    pub fn contains(&self, address: &Address) -> bool {
        address.squared_distance_to(&self.origin()) <= self.distance * self.distance
    }
}

/// `{"results": [...]}` envelope used by list-shaped responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressList {
    pub results: Vec<Address>,
}

impl AddressList {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(results: Vec<Address>) -> Self {
        Self { results }
    }
}
