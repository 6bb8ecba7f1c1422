use anyhow::Result;
use async_trait::async_trait;

use quarry_common::SearchHit;

/// Produces normalized text for one URL. The batch orchestrator only
/// touches this seam, so tests can swap in a canned implementation.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String>;
}

/// A keyword search backend. Implementations return results already
/// mapped into the common `SearchHit` shape.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}
