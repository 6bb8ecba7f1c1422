// arXiv abstract extraction via the export API client.

use anyhow::{Context, Result};
use arxiv_client::ArxivClient;
use tracing::info;

pub(crate) struct ArxivExtractor {
    client: ArxivClient,
}

impl ArxivExtractor {
    pub(crate) fn new() -> Self {
        Self {
            client: ArxivClient::new(),
        }
    }

    /// Fetch the abstract for an arXiv identifier. The export feed's
    /// first record is the requested article; its summary is the abstract.
    pub(crate) async fn abstract_text(&self, article_id: &str) -> Result<String> {
        info!(article_id, extractor = "arxiv", "Fetching abstract");

        let docs = self
            .client
            .fetch_metadata(article_id)
            .await
            .context("arXiv metadata request failed")?;

        let abstract_text = docs
            .into_iter()
            .next()
            .map(|doc| doc.summary)
            .with_context(|| format!("No arXiv record found for {article_id}"))?;

        info!(
            article_id,
            extractor = "arxiv",
            chars = abstract_text.len(),
            "Extracted abstract"
        );
        Ok(abstract_text)
    }
}
