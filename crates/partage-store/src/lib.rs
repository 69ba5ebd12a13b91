//! # partage-store
//!
//! Local persistence for the Partage application, backed by SQLite.
//!
//! The database holds a single `kv` table that simulates the browser's
//! key-value storage: each of the three logical namespaces (listings,
//! users, session) is one row whose payload is a JSON blob.  The crate
//! exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed load/save accessors for
//! every namespace.  Loads tolerate missing or corrupt payloads by
//! returning the empty default.

pub mod database;
pub mod listings;
pub mod migrations;
pub mod models;
pub mod session;
pub mod users;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
