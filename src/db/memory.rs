use crate::db::{NameStore, NameTable};
use crate::error::LoaderError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Column width of `name` in both tables.
const NAME_MAX_CHARS: usize = 100;

#[derive(Default)]
struct State {
    tables: HashMap<NameTable, Vec<String>>,
    existence_checks: Vec<NameTable>,
    create_calls: usize,
}

/// In-memory stand-in for the name tables with the same uniqueness and
/// width rules as the Postgres schema.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub(crate) fn with_table(self, table: NameTable) -> Self {
        self.lock().tables.entry(table).or_default();
        self
    }

    pub(crate) fn rows(&self, table: NameTable) -> Option<Vec<String>> {
        self.lock().tables.get(&table).cloned()
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.lock().create_calls
    }

    pub(crate) fn existence_checks(&self) -> Vec<NameTable> {
        self.lock().existence_checks.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }
}

fn rejected(table: NameTable, name: &str, reason: String) -> LoaderError {
    LoaderError::Insert {
        table: table.table_name(),
        name: name.to_string(),
        source: sqlx::Error::Protocol(reason),
    }
}

impl NameStore for MemoryStore {
    async fn table_exists(&self, table: NameTable) -> Result<bool, LoaderError> {
        let mut state = self.lock();
        state.existence_checks.push(table);
        Ok(state.tables.contains_key(&table))
    }

    async fn create_tables(&self) -> Result<(), LoaderError> {
        let mut state = self.lock();
        state.create_calls += 1;
        for table in NameTable::ALL {
            if state.tables.contains_key(&table) {
                return Err(LoaderError::Schema(sqlx::Error::Protocol(format!(
                    "relation \"{table}\" already exists"
                ))));
            }
        }
        for table in NameTable::ALL {
            state.tables.insert(table, Vec::new());
        }
        Ok(())
    }

    async fn insert_or_ignore(&self, table: NameTable, name: &str) -> Result<bool, LoaderError> {
        // Give the other pass a turn, as a real round trip would.
        tokio::task::yield_now().await;
        let mut state = self.lock();
        let Some(rows) = state.tables.get_mut(&table) else {
            return Err(rejected(
                table,
                name,
                format!("relation \"{table}\" does not exist"),
            ));
        };
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(rejected(
                table,
                name,
                "value too long for type character varying(100)".to_string(),
            ));
        }
        if rows.iter().any(|existing| existing == name) {
            return Ok(false);
        }
        rows.push(name.to_string());
        Ok(true)
    }
}
