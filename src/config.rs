//! Runtime configuration, read once from the process environment.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::LoaderError;

const PASSWORD_MASK: &str = "******";

pub const DEFAULT_LOGLEVEL: &str = "info";

/// Connection settings for the destination database.
///
/// Every field is required; the values come from `DATABASE_USER`,
/// `DATABASE_PASS`, `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_NAME` and
/// `DATABASE_SSL`.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: String,
    pub name: String,
    pub ssl: String,
}

impl DatabaseConfig {
    /// Full connection URL, password included. Never log this.
    pub fn url(&self) -> String {
        self.format_url(&self.pass)
    }

    /// Connection URL with the password segment masked.
    pub fn redacted_url(&self) -> String {
        self.format_url(PASSWORD_MASK)
    }

    fn format_url(&self, pass: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.user, pass, self.host, self.port, self.name, self.ssl
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("pass", &PASSWORD_MASK)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("ssl", &self.ssl)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub loglevel: String,
}

#[derive(Serialize)]
struct Defaults {
    loglevel: &'static str,
}

impl Config {
    /// Build the configuration from `DATABASE_*` variables and `LOGLEVEL`.
    pub fn from_env() -> Result<Self, LoaderError> {
        Self::figment().extract().map_err(|e| LoaderError::Config(Box::new(e)))
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Defaults {
            loglevel: DEFAULT_LOGLEVEL,
        }))
        .merge(Env::raw().only(&["LOGLEVEL"]))
        .merge(Serialized::default("database", raw_database_env()))
    }
}

/// `DATABASE_*` values exactly as set. `Env` as a provider would parse
/// `007` into the number 7; these go into the URL untouched.
fn raw_database_env() -> BTreeMap<String, String> {
    Env::prefixed("DATABASE_")
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect()
}
