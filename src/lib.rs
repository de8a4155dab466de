//! # Address Book - named coordinates over HTTP
//!
//! Address Book provides:
//! - A SQLite-backed store of named coordinate pairs
//! - CRUD by name plus an inclusive Euclidean radius query
//! - A stateless service layer over an injected store handle
//! - An axum HTTP surface and a small CLI for local inspection

pub mod address;
pub mod storage;
pub mod service;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use address::{Address, AddressList, Coordinates, RangeQuery};
pub use storage::{AddressStore, SqliteStore};
pub use service::AddressService;

/// Result type alias for Address Book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Address Book operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("address not found: {0}")]
    NotFound(String),

    #[error("address already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("{statement} of {name} affected no rows")]
    NoRowsAffected { statement: &'static str, name: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
