// REST handlers. Extraction endpoints mirror the pipeline's containment
// policy at the transport boundary: a failed extraction answers with an
// empty body, never an error status.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use quarry_common::SearchHit;
use quarry_extract::{extract_batch, ContentSource, SearchDispatcher};

use crate::AppState;

// --- Request/response shapes ---

#[derive(Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Deserialize)]
pub struct ScrapeUrlsRequest {
    pub urls: Vec<String>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_max_results() -> usize {
    7
}

/// One surviving batch entry. `raw_content` is the wire name consumers
/// already depend on.
#[derive(Serialize)]
pub struct ScrapedEntry {
    pub url: String,
    pub raw_content: String,
}

// --- Extraction endpoints ---

pub async fn pdf_scraper(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeRequest>,
) -> String {
    contain(&req.url, state.extract.pdf_text(&req.url).await)
}

pub async fn arxiv_scraper(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeRequest>,
) -> String {
    contain(&req.url, state.extract.arxiv_text(&req.url).await)
}

pub async fn wikipedia_scraper(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeRequest>,
) -> String {
    contain(&req.url, state.extract.wikipedia_text(&req.url).await)
}

pub async fn web_scraper(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeRequest>,
) -> String {
    contain(&req.url, state.extract.web_text(&req.url).await)
}

pub async fn scrape_urls(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrapeUrlsRequest>,
) -> Json<Vec<ScrapedEntry>> {
    let source: Arc<dyn ContentSource> = state.extract.clone();
    let entries = extract_batch(source, &req.urls)
        .await
        .into_iter()
        .map(|item| ScrapedEntry {
            url: item.url,
            raw_content: item.content,
        })
        .collect();
    Json(entries)
}

// --- Search endpoints ---

pub async fn ddg_search(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Json<Vec<SearchHit>> {
    let dispatcher = SearchDispatcher::new(None);
    Json(dispatcher.search_primary(&req.query, req.max_results).await)
}

pub async fn tavily_search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Json<Vec<SearchHit>> {
    // Request-level key wins over the configured one.
    let api_key = req.api_key.or_else(|| state.tavily_api_key.clone());
    let dispatcher = SearchDispatcher::new(api_key);
    Json(
        dispatcher
            .search_with_fallback(&req.query, req.max_results)
            .await,
    )
}

fn contain(url: &str, result: anyhow::Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!(url, error = %e, "Extraction failed");
            String::new()
        }
    }
}
