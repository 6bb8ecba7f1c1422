// Search dispatch: primary provider (DuckDuckGo), credentialed secondary
// (Tavily) with fallback to primary, and a domain filter on every output.

mod ddg;
mod tavily;

pub use ddg::DdgSearcher;
pub use tavily::TavilySearcher;

use tracing::warn;

use quarry_common::SearchHit;

use crate::traits::WebSearcher;

/// Hits pointing at this domain are dropped from all dispatcher output.
const EXCLUDED_DOMAIN: &str = "youtube.com";

pub struct SearchDispatcher {
    primary: Box<dyn WebSearcher>,
    secondary: Box<dyn WebSearcher>,
}

impl SearchDispatcher {
    pub fn new(tavily_api_key: Option<String>) -> Self {
        Self {
            primary: Box::new(DdgSearcher::new()),
            secondary: Box::new(TavilySearcher::new(tavily_api_key)),
        }
    }

    pub fn with_providers(
        primary: Box<dyn WebSearcher>,
        secondary: Box<dyn WebSearcher>,
    ) -> Self {
        Self { primary, secondary }
    }

    /// Query the primary provider only. Has no fallback of its own — a
    /// provider failure is logged and yields an empty list.
    pub async fn search_primary(&self, query: &str, max_results: usize) -> Vec<SearchHit> {
        let hits = match self.primary.search(query, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query, error = %e, "Primary search failed");
                Vec::new()
            }
        };
        drop_excluded(hits)
    }

    /// Query the secondary (credentialed) provider; on failure, log and
    /// fall back to the primary with the same query and cap. The secondary
    /// call is awaited to completion before any fallback starts.
    pub async fn search_with_fallback(&self, query: &str, max_results: usize) -> Vec<SearchHit> {
        let hits = match self.secondary.search(query, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query, error = %e, "Secondary search failed, falling back to primary");
                match self.primary.search(query, max_results).await {
                    Ok(hits) => hits,
                    Err(e) => {
                        warn!(query, error = %e, "Fallback search failed");
                        Vec::new()
                    }
                }
            }
        };
        drop_excluded(hits)
    }
}

fn drop_excluded(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    hits.into_iter()
        .filter(|hit| !hit.href.contains(EXCLUDED_DOMAIN))
        .collect()
}
