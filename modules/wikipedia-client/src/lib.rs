pub mod error;

pub use error::{Result, WikipediaError};

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

const API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// A page returned by a title search, with its plain-text extract.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiPage {
    pub title: String,
    #[serde(default)]
    pub extract: String,
    /// Search-result rank. The `pages` object is keyed by page id, so this
    /// is the only way to recover retrieval order.
    #[serde(default)]
    pub index: i64,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, WikiPage>,
}

pub struct WikipediaClient {
    client: reqwest::Client,
}

impl WikipediaClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Search for pages matching `title` and return up to `limit` of them
    /// with plain-text extracts, in retrieval order.
    pub async fn fetch_pages(&self, title: &str, limit: u32) -> Result<Vec<WikiPage>> {
        let limit_str = limit.to_string();
        let resp = self
            .client
            .get(API_URL)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("generator", "search"),
                ("gsrsearch", title),
                ("gsrlimit", &limit_str),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("exlimit", "max"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(WikipediaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: QueryResponse = resp.json().await?;

        let mut pages: Vec<WikiPage> = data
            .query
            .map(|q| q.pages.into_values().collect())
            .unwrap_or_default();
        pages.sort_by_key(|p| p.index);

        info!(title, count = pages.len(), "Fetched Wikipedia extracts");
        Ok(pages)
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}
