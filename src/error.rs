use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LoaderError {
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("download of {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("database connect failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("insert into {table} failed for {name:?}: {source}")]
    Insert {
        table: &'static str,
        name: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("insert pass did not finish: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LoaderError {
    pub(crate) fn fetch(url: &url::Url, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source,
        }
    }
}
