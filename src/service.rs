//! Address service
//!
//! Thin façade between callers and the storage gateway:
//! - Rejects non-finite coordinates and distances
//! - Delegates every operation 1:1 to the injected store
//! - Seeds sample data on first start

use crate::{Error, Result};
use crate::address::{Address, AddressList, Coordinates, RangeQuery};
use crate::storage::AddressStore;

/// Stateless service over an injected address store
pub struct AddressService<S: AddressStore> {
    store: S,
}

impl<S: AddressStore> AddressService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the schema and seed the samples if the table is empty.
    ///
    /// Returns true when samples were inserted.
    pub fn bootstrap(&self, seed: bool) -> Result<bool> {
        self.store.initialize()?;
        if seed && self.store.is_empty()? {
            self.store.seed_samples()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn list(&self) -> Result<AddressList> {
        Ok(self.store.list_all()?.into())
    }

    pub fn get(&self, name: &str) -> Result<Address> {
        self.store.get_by_name(name)
    }

    pub fn update(&self, name: &str, coords: Coordinates) -> Result<Address> {
        validate_coordinates(&coords)?;
        self.store.update_by_name(name, coords.longitude, coords.latitude)
    }

    pub fn create(&self, address: &Address) -> Result<Address> {
        validate_coordinates(&address.coordinates())?;
        self.store.create_by_name(&address.name, address.longitude, address.latitude)
    }

    pub fn delete(&self, name: &str) -> Result<Address> {
        self.store.delete_by_name(name)
    }

    pub fn delete_all(&self) -> Result<AddressList> {
        Ok(self.store.delete_all()?.into())
    }

    /// Records within `query.distance` of the origin, boundary included.
    pub fn in_range(&self, query: &RangeQuery) -> Result<AddressList> {
        validate_coordinates(&query.origin())?;
        if !query.distance.is_finite() {
            return Err(Error::InvalidInput(format!("distance must be finite, got {}", query.distance)));
        }
        Ok(self
            .store
            .find_in_range(query.longitude, query.latitude, query.distance)?
            .into())
    }
}

fn validate_coordinates(coords: &Coordinates) -> Result<()> {
    if coords.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "coordinates must be finite, got ({}, {})",
            coords.longitude, coords.latitude
        )))
    }
}
