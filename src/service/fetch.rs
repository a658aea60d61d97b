use crate::error::LoaderError;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

pub static FIRST_NAMES_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://raw.githubusercontent.com/philipperemy/name-dataset/master/names_dataset/first_names.all.txt")
        .expect("invalid first names url")
});

pub static LAST_NAMES_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://raw.githubusercontent.com/philipperemy/name-dataset/master/names_dataset/last_names.all.txt")
        .expect("invalid last names url")
});

/// Where the two name lists are downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub first_names: Url,
    pub last_names: Url,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            first_names: FIRST_NAMES_URL.clone(),
            last_names: LAST_NAMES_URL.clone(),
        }
    }
}

pub fn client() -> Result<reqwest::Client, LoaderError> {
    reqwest::Client::builder()
        .user_agent(concat!("name-loader/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(LoaderError::HttpClient)
}

/// GET `url` and return the whole body as text. Non-2xx statuses are errors.
pub async fn download(client: &reqwest::Client, url: &Url) -> Result<String, LoaderError> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| LoaderError::fetch(url, e))?;
    let body = resp.text().await.map_err(|e| LoaderError::fetch(url, e))?;
    debug!(url = %url, bytes = body.len(), "download finished");
    Ok(body)
}

/// Split raw text into candidate names on `\n`, keeping every piece as-is.
pub fn split(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_owned).collect()
}
