use crate::config::DatabaseConfig;
use crate::db::NameStore;
use crate::db::models::{NameRecord, NameTable};
use crate::db::schema::{POSTGRES_INIT, TABLE_EXISTS};
use crate::error::LoaderError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};

/// One connection per insert pass.
const MAX_CONNECTIONS: u32 = 2;

#[derive(Clone)]
pub struct NamesStorage {
    pool: Pool<Postgres>,
    catalog: String,
}

impl NamesStorage {
    pub fn new(pool: PgPool, catalog: impl Into<String>) -> Self {
        Self {
            pool,
            catalog: catalog.into(),
        }
    }

    /// Open the pool and make sure at least one connection succeeds.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, LoaderError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&cfg.url())
            .await
            .map_err(LoaderError::Connect)?;
        Ok(Self::new(pool, cfg.name.clone()))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All stored rows of `table`, in insertion order.
    pub async fn list(&self, table: NameTable) -> Result<Vec<NameRecord>, LoaderError> {
        let rows = sqlx::query_as::<_, NameRecord>(table.select_query())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

impl NameStore for NamesStorage {
    async fn table_exists(&self, table: NameTable) -> Result<bool, LoaderError> {
        sqlx::query_scalar::<_, bool>(TABLE_EXISTS)
            .bind(&self.catalog)
            .bind(table.table_name())
            .fetch_one(&self.pool)
            .await
            .map_err(LoaderError::Schema)
    }

    async fn create_tables(&self) -> Result<(), LoaderError> {
        // raw_sql runs the whole script over the simple query protocol.
        sqlx::raw_sql(POSTGRES_INIT)
            .execute(&self.pool)
            .await
            .map_err(LoaderError::Schema)?;
        Ok(())
    }

    async fn insert_or_ignore(&self, table: NameTable, name: &str) -> Result<bool, LoaderError> {
        let done = sqlx::query(table.insert_query())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|source| LoaderError::Insert {
                table: table.table_name(),
                name: name.to_string(),
                source,
            })?;
        Ok(done.rows_affected() == 1)
    }
}
