// Batch orchestration: bounded fan-out over URLs with per-URL containment.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use quarry_common::ScrapedContent;

use crate::quality;
use crate::traits::ContentSource;

/// Concurrency cap for in-flight extractions. Bounds simultaneous network
/// calls; a slow URL delays batch completion, never sibling results.
pub const MAX_CONCURRENT_EXTRACTIONS: usize = 20;

/// Extract content for every URL in the batch and return the survivors.
///
/// Each URL runs independently: an extraction failure or a quality-gate
/// rejection drops that URL and nothing else. Duplicates in the input are
/// each processed on their own. Output order follows completion order,
/// not submission order — each entry carries its URL, and ordering among
/// survivors is not a contract.
///
/// This function never fails; an all-bad batch yields an empty vec.
pub async fn extract_batch(
    source: Arc<dyn ContentSource>,
    urls: &[String],
) -> Vec<ScrapedContent> {
    let outcomes: Vec<Option<ScrapedContent>> =
        stream::iter(urls.iter().cloned().map(|url| {
            let source = source.clone();
            async move {
                match source.extract(&url).await {
                    Ok(content) if quality::is_substantial(&content) => {
                        Some(ScrapedContent { url, content })
                    }
                    Ok(content) => {
                        info!(
                            url,
                            chars = content.chars().count(),
                            "Content below quality bar, dropping"
                        );
                        None
                    }
                    Err(e) => {
                        warn!(url, error = %e, "Extraction failed, dropping");
                        None
                    }
                }
            }
        }))
        .buffer_unordered(MAX_CONCURRENT_EXTRACTIONS)
        .collect()
        .await;

    let kept: Vec<ScrapedContent> = outcomes.into_iter().flatten().collect();
    info!(
        submitted = urls.len(),
        kept = kept.len(),
        "Batch extraction complete"
    );
    kept
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::{bail, Result};
    use async_trait::async_trait;

    use super::*;

    /// HashMap-backed content source. Unregistered URLs return `Err`.
    struct CannedSource {
        responses: HashMap<String, String>,
    }

    impl CannedSource {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn on(mut self, url: &str, content: &str) -> Self {
            self.responses.insert(url.to_string(), content.to_string());
            self
        }
    }

    #[async_trait]
    impl ContentSource for CannedSource {
        async fn extract(&self, url: &str) -> Result<String> {
            match self.responses.get(url) {
                Some(content) => Ok(content.clone()),
                None => bail!("no canned response for {url}"),
            }
        }
    }

    fn urls(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|u| u.to_string()).collect()
    }

    #[tokio::test]
    async fn failures_drop_only_their_own_url() {
        let source = Arc::new(
            CannedSource::new()
                .on("https://a.example/page", &"a".repeat(150))
                .on("https://c.example/page", &"c".repeat(150)),
        );
        let batch = urls(&[
            "https://a.example/page",
            "https://b.example/broken",
            "https://c.example/page",
        ]);

        let results = extract_batch(source, &batch).await;

        assert_eq!(results.len(), 2);
        let kept_urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert!(kept_urls.contains(&"https://a.example/page"));
        assert!(kept_urls.contains(&"https://c.example/page"));
        assert!(!kept_urls.contains(&"https://b.example/broken"));
    }

    #[tokio::test]
    async fn all_failures_yield_empty_list() {
        let source = Arc::new(CannedSource::new());
        let batch = urls(&["https://x.example/1", "https://x.example/2"]);

        let results = extract_batch(source, &batch).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_list() {
        let source = Arc::new(CannedSource::new());
        let results = extract_batch(source, &[]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn quality_gate_boundary() {
        let source = Arc::new(
            CannedSource::new()
                .on("https://short.example", &"x".repeat(99))
                .on("https://exact.example", &"x".repeat(100)),
        );
        let batch = urls(&["https://short.example", "https://exact.example"]);

        let results = extract_batch(source, &batch).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://exact.example");
        assert_eq!(results[0].content.len(), 100);
    }

    #[tokio::test]
    async fn duplicate_urls_each_processed() {
        let source = Arc::new(CannedSource::new().on("https://dup.example", &"d".repeat(120)));
        let batch = urls(&["https://dup.example", "https://dup.example"]);

        let results = extract_batch(source, &batch).await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.url == "https://dup.example"));
    }

    #[tokio::test]
    async fn batch_larger_than_concurrency_cap() {
        let mut source = CannedSource::new();
        let mut batch = Vec::new();
        for i in 0..50 {
            let url = format!("https://many.example/{i}");
            source = source.on(&url, &"y".repeat(200));
            batch.push(url);
        }

        let results = extract_batch(Arc::new(source), &batch).await;
        assert_eq!(results.len(), 50);
    }
}
