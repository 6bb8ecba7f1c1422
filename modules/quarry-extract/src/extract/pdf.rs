// PDF extraction: fetch the document, pull text from every page.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

pub(crate) struct PdfExtractor {
    client: reqwest::Client,
}

impl PdfExtractor {
    pub(crate) fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch a PDF and return its text, pages concatenated in page order.
    pub(crate) async fn extract(&self, url: &str) -> Result<String> {
        info!(url, extractor = "pdf", "Fetching PDF");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("PDF fetch failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("PDF fetch for {url} returned status {status}");
        }

        let bytes = resp.bytes().await.context("PDF body read failed")?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow::anyhow!("PDF text extraction failed for {url}: {e}"))?;

        info!(url, extractor = "pdf", chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}
