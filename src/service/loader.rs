//! Orchestration of a full load: fetch, schema check, two insert passes.

use crate::config::Config;
use crate::db::{NameStore, NameTable, NamesStorage};
use crate::error::LoaderError;
use crate::service::fetch::{self, Sources};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    Created,
    Found,
}

/// Counts for one table's pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub table: NameTable,
    pub candidates: usize,
    pub inserted: usize,
    /// Zero-length candidates that were never sent to the database.
    pub skipped: usize,
}

impl PassReport {
    fn new(table: NameTable, candidates: usize) -> Self {
        Self {
            table,
            candidates,
            inserted: 0,
            skipped: 0,
        }
    }

    /// Candidates the database already had.
    pub fn duplicates(&self) -> usize {
        self.candidates - self.inserted - self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub schema: SchemaAction,
    pub first_names: PassReport,
    pub last_names: PassReport,
}

/// Create both tables when neither exists. If either one is present nothing
/// is created, so a database holding only one of them stays that way.
pub async fn ensure_schema<S: NameStore>(store: &S) -> Result<SchemaAction, LoaderError> {
    if !store.table_exists(NameTable::FirstNames).await?
        && !store.table_exists(NameTable::LastNames).await?
    {
        store.create_tables().await?;
        info!("database: created name tables");
        Ok(SchemaAction::Created)
    } else {
        info!("database: found name tables");
        Ok(SchemaAction::Found)
    }
}

/// Insert `names` into `table` one at a time. The first error ends the pass.
pub async fn insert_pass<S: NameStore>(
    store: &S,
    table: NameTable,
    names: &[String],
) -> Result<PassReport, LoaderError> {
    info!("database: inserting {}", table.label());
    let mut report = PassReport::new(table, names.len());

    for name in names {
        if name.is_empty() {
            report.skipped += 1;
            continue;
        }
        if store.insert_or_ignore(table, name).await? {
            report.inserted += 1;
        } else {
            debug!(table = %table, name = %name, "name already present");
        }
    }

    info!(
        inserted = report.inserted,
        duplicates = report.duplicates(),
        skipped = report.skipped,
        "database: {} complete",
        table.label()
    );
    Ok(report)
}

/// Run the first-name pass on a spawned task alongside the last-name pass,
/// and wait for both. The first error from either side stops the other.
pub async fn load<S: NameStore>(
    store: &S,
    first_names: Vec<String>,
    last_names: Vec<String>,
) -> Result<(PassReport, PassReport), LoaderError> {
    let background = store.clone();
    let mut first_pass = tokio::spawn(async move {
        insert_pass(&background, NameTable::FirstNames, &first_names).await
    });
    let last_pass = insert_pass(store, NameTable::LastNames, &last_names);
    tokio::pin!(last_pass);

    tokio::select! {
        joined = &mut first_pass => {
            // Returning early drops `last_pass`, cancelling it at its next await.
            let first = joined??;
            let last = last_pass.await?;
            Ok((first, last))
        }
        last = &mut last_pass => match last {
            Ok(last) => {
                let first = first_pass.await??;
                Ok((first, last))
            }
            Err(e) => {
                first_pass.abort();
                Err(e)
            }
        },
    }
}

/// Download both lists, make sure the tables exist, then load them into `store`.
pub async fn fetch_and_load<S: NameStore>(
    store: &S,
    client: &reqwest::Client,
    sources: &Sources,
) -> Result<LoadReport, LoaderError> {
    let (raw_first, raw_last) = tokio::try_join!(
        fetch::download(client, &sources.first_names),
        fetch::download(client, &sources.last_names),
    )?;

    let first_names = fetch::split(&raw_first);
    info!("download: {} first names", first_names.len());
    let last_names = fetch::split(&raw_last);
    info!("download: {} last names", last_names.len());

    let schema = ensure_schema(store).await?;
    let (first_names, last_names) = load(store, first_names, last_names).await?;

    Ok(LoadReport {
        schema,
        first_names,
        last_names,
    })
}

/// Connect to the configured database and perform a full load.
pub async fn run(cfg: &Config, sources: &Sources) -> Result<LoadReport, LoaderError> {
    info!(database = %cfg.database.redacted_url(), "database: connecting");
    let store = NamesStorage::connect(&cfg.database).await?;
    info!("database: connect OK");

    let client = fetch::client()?;
    fetch_and_load(&store, &client, sources).await
}
