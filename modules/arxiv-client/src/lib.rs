pub mod error;

pub use error::{ArxivError, Result};

use std::time::Duration;

use tracing::info;

const BASE_URL: &str = "https://export.arxiv.org/api/query";

/// How many metadata records to request per identifier. The export API
/// may return related versions; callers take the first record.
const MAX_RECORDS: u32 = 2;

/// A metadata record from the arXiv export feed.
#[derive(Debug, Clone)]
pub struct ArxivDoc {
    pub title: String,
    pub summary: String,
}

pub struct ArxivClient {
    client: reqwest::Client,
}

impl ArxivClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch metadata records for an arXiv identifier (e.g. "2409.02056").
    /// Records come back in feed order; the first is the requested article.
    pub async fn fetch_metadata(&self, article_id: &str) -> Result<Vec<ArxivDoc>> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("id_list", article_id),
                ("max_results", &MAX_RECORDS.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ArxivError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.bytes().await?;
        let feed = feed_rs::parser::parse(body.as_ref())
            .map_err(|e| ArxivError::Parse(e.to_string()))?;

        let docs: Vec<ArxivDoc> = feed
            .entries
            .into_iter()
            .map(|entry| ArxivDoc {
                title: entry.title.map(|t| t.content).unwrap_or_default(),
                summary: entry.summary.map(|t| t.content).unwrap_or_default(),
            })
            .collect();

        info!(article_id, count = docs.len(), "Fetched arXiv metadata");
        Ok(docs)
    }
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}
