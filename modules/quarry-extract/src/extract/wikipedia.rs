// Wikipedia article extraction via the MediaWiki client.

use anyhow::{Context, Result};
use tracing::info;
use wikipedia_client::WikipediaClient;

/// How many matching pages to pull per lookup. Extracts are concatenated
/// in retrieval order.
const MAX_PAGES: u32 = 3;

pub(crate) struct WikipediaExtractor {
    client: WikipediaClient,
}

impl WikipediaExtractor {
    pub(crate) fn new() -> Self {
        Self {
            client: WikipediaClient::new(),
        }
    }

    /// Look up an article title (URL form, underscores for spaces) and
    /// return the concatenated extracts of the matching pages.
    pub(crate) async fn article_text(&self, article_title: &str) -> Result<String> {
        let lookup_title = article_title.replace('_', " ");
        info!(
            title = %lookup_title,
            extractor = "wikipedia",
            "Fetching article extracts"
        );

        let pages = self
            .client
            .fetch_pages(&lookup_title, MAX_PAGES)
            .await
            .context("Wikipedia extracts request failed")?;

        let mut content = String::new();
        for page in pages {
            content.push_str(&page.extract);
        }

        info!(
            title = %lookup_title,
            extractor = "wikipedia",
            chars = content.len(),
            "Extracted article text"
        );
        Ok(content)
    }
}
