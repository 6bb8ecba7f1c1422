// Tavily searcher: credentialed API with advanced search depth. Native
// result shape is `{url, content}`; mapped to the common hit shape here.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use quarry_common::SearchHit;

use crate::traits::WebSearcher;

const SEARCH_URL: &str = "https://api.tavily.com/search";

pub struct TavilySearcher {
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

impl TavilySearcher {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { api_key, client }
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let api_key = self
            .api_key
            .as_deref()
            .context("No Tavily API key configured")?;

        info!(query, max_results, provider = "tavily", "Searching");

        let body = TavilyRequest {
            api_key,
            query,
            search_depth: "advanced",
            max_results,
        };

        let resp = self
            .client
            .post(SEARCH_URL)
            .json(&body)
            .send()
            .await
            .context("Tavily API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            anyhow::bail!("Tavily API error (status {status}): {message}");
        }

        let data: TavilyResponse = resp
            .json()
            .await
            .context("Failed to parse Tavily response")?;

        let hits = map_response(data);
        info!(query, count = hits.len(), provider = "tavily", "Search complete");
        Ok(hits)
    }
}

fn map_response(data: TavilyResponse) -> Vec<SearchHit> {
    data.results
        .into_iter()
        .map(|r| SearchHit {
            href: r.url,
            body: r.content,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_shape_maps_to_common_hit() {
        let data: TavilyResponse =
            serde_json::from_str(r#"{"results": [{"url": "https://x", "content": "y"}]}"#)
                .expect("valid fixture");

        let hits = map_response(data);
        assert_eq!(
            hits,
            vec![SearchHit {
                href: "https://x".to_string(),
                body: "y".to_string(),
            }]
        );
    }

    #[test]
    fn missing_results_field_maps_to_empty() {
        let data: TavilyResponse = serde_json::from_str(r#"{"answer": "none"}"#)
            .expect("valid fixture");
        assert!(map_response(data).is_empty());
    }
}
