//! Database module: schema, row models and the Postgres-backed store.
//!
//! Layout:
//! - `schema.rs`: SQL DDL and statements for the two name tables
//! - `models.rs`: table selector and row struct
//! - `postgres.rs`: `NamesStorage`, the `PgPool` implementation of [`NameStore`]

#[cfg(test)]
pub(crate) mod memory;
pub mod models;
pub mod postgres;
pub mod schema;

pub use models::{NameRecord, NameTable};
pub use postgres::NamesStorage;
pub use schema::POSTGRES_INIT;

use crate::error::LoaderError;
use std::future::Future;

/// Storage operations the loader needs from the destination database.
pub trait NameStore: Clone + Send + Sync + 'static {
    fn table_exists(
        &self,
        table: NameTable,
    ) -> impl Future<Output = Result<bool, LoaderError>> + Send;

    /// Create both name tables in one go.
    fn create_tables(&self) -> impl Future<Output = Result<(), LoaderError>> + Send;

    /// Insert `name` unless it is already present. Returns whether a row was added.
    fn insert_or_ignore(
        &self,
        table: NameTable,
        name: &str,
    ) -> impl Future<Output = Result<bool, LoaderError>> + Send;
}
