//! SQLite storage implementation

use std::path::PathBuf;
use rusqlite::{Connection, OptionalExtension, params};
use crate::{Error, Result};
use crate::address::Address;
use super::{AddressStore, SAMPLE_ADDRESSES, schema};

const ADDRESS_SELECT_SQL: &str = "SELECT longitude, latitude, name FROM address";

/// SQLite-backed address store
///
/// Holds only the database path. Each call opens a fresh connection and
/// drops it on return.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Point at a database file without touching it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Point at a database file (creates if doesn't exist) and make sure the schema is in place
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Helper to convert a row to an Address
    fn row_to_address(row: &rusqlite::Row) -> rusqlite::Result<Address> {
        Ok(Address {
            longitude: row.get(0)?,
            latitude: row.get(1)?,
            name: row.get(2)?,
        })
    }

    fn query_addresses(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Address>> {
        let mut stmt = conn.prepare(sql)?;
        let addresses = stmt
            .query_map(params, Self::row_to_address)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(addresses)
    }
}

/// True when the error is the unique index on `address.name` rejecting a row
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl AddressStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::debug!("Address schema ready at {}", self.path.display());
        Ok(())
    }

    fn is_empty(&self) -> Result<bool> {
        let conn = self.connect()?;
        let exists: bool = conn.query_row("SELECT EXISTS(SELECT 1 FROM address)", [], |row| row.get(0))?;
        Ok(!exists)
    }

    fn seed_samples(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO address (longitude, latitude, name) VALUES (?1, ?2, ?3)")?;
            for sample in SAMPLE_ADDRESSES {
                stmt.execute(params![sample.longitude, sample.latitude, sample.name])?;
            }
        }
        tx.commit()?;
        tracing::info!("Seeded {} sample addresses", SAMPLE_ADDRESSES.len());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Address>> {
        let conn = self.connect()?;
        Self::query_addresses(&conn, ADDRESS_SELECT_SQL, [])
    }

    fn get_by_name(&self, name: &str) -> Result<Address> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("{ADDRESS_SELECT_SQL} WHERE name = ?1"),
            [name],
            Self::row_to_address,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn update_by_name(&self, name: &str, longitude: f64, latitude: f64) -> Result<Address> {
        let conn = self.connect()?;
        let changed = conn.execute(
            r#"
            UPDATE address
            SET longitude = ?1, latitude = ?2
            WHERE name = ?3
            "#,
            params![longitude, latitude, name],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(name.to_string()));
        }
        tracing::debug!(name, longitude, latitude, "Updated address");
        self.get_by_name(name)
    }

    fn create_by_name(&self, name: &str, longitude: f64, latitude: f64) -> Result<Address> {
        let conn = self.connect()?;
        let inserted = conn
            .execute(
                "INSERT INTO address (longitude, latitude, name) VALUES (?1, ?2, ?3)",
                params![longitude, latitude, name],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::Conflict(name.to_string())
                } else {
                    Error::Storage(e)
                }
            })?;
        if inserted == 0 {
            return Err(Error::NoRowsAffected {
                statement: "insert",
                name: name.to_string(),
            });
        }
        tracing::debug!(name, longitude, latitude, "Created address");
        self.get_by_name(name)
    }

    fn delete_by_name(&self, name: &str) -> Result<Address> {
        let address = self.get_by_name(name)?;

        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM address WHERE name = ?1", [name])?;
        if deleted == 0 {
            return Err(Error::NoRowsAffected {
                statement: "delete",
                name: name.to_string(),
            });
        }
        tracing::debug!(name, "Deleted address");
        Ok(address)
    }

    fn delete_all(&self) -> Result<Vec<Address>> {
        let snapshot = self.list_all()?;

        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM address", [])?;
        tracing::info!("Cleared {} addresses", deleted);
        Ok(snapshot)
    }

    fn find_in_range(
        &self,
        origin_longitude: f64,
        origin_latitude: f64,
        distance: f64,
    ) -> Result<Vec<Address>> {
        let conn = self.connect()?;
        Self::query_addresses(
            &conn,
            r#"
            SELECT longitude, latitude, name
            FROM address
            WHERE (
                ((longitude - ?1) * (longitude - ?1))
                + ((latitude - ?2) * (latitude - ?2))
            ) <= (?3 * ?3)
            "#,
            params![origin_longitude, origin_latitude, distance],
        )
    }
}
