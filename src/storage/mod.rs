//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - address(longitude, latitude, name)
//!
//! Every operation opens its own connection; nothing is pooled or cached
//! between calls.

pub mod samples;
pub mod schema;
pub mod sqlite;

pub use samples::{SampleAddress, SAMPLE_ADDRESSES};
pub use sqlite::SqliteStore;

use crate::Result;
use crate::address::Address;

/// Storage gateway for address records.
///
/// The service layer only talks to this trait, so tests can swap in an
/// in-memory double.
pub trait AddressStore: Send + Sync {
    /// Ensure the address table exists. Safe to call repeatedly.
    fn initialize(&self) -> Result<()>;

    /// True when no rows exist.
    fn is_empty(&self) -> Result<bool>;

    /// Insert the fixed sample list.
    fn seed_samples(&self) -> Result<()>;

    /// Every record, in storage iteration order.
    fn list_all(&self) -> Result<Vec<Address>>;

    /// Exact, case-sensitive lookup. `Error::NotFound` if absent.
    fn get_by_name(&self, name: &str) -> Result<Address>;

    /// Replace the coordinates of an existing record and return the refreshed row.
    fn update_by_name(&self, name: &str, longitude: f64, latitude: f64) -> Result<Address>;

    /// Insert a new record. `Error::Conflict` if the name is taken.
    fn create_by_name(&self, name: &str, longitude: f64, latitude: f64) -> Result<Address>;

    /// Remove a record and return what was removed.
    fn delete_by_name(&self, name: &str) -> Result<Address>;

    /// Clear the table and return the rows it held.
    fn delete_all(&self) -> Result<Vec<Address>>;

    /// Records whose squared distance from the origin is `<= distance²`.
    fn find_in_range(
        &self,
        origin_longitude: f64,
        origin_latitude: f64,
        distance: f64,
    ) -> Result<Vec<Address>>;
}
