// DuckDuckGo searcher: scrapes the HTML results endpoint. No credential
// and no hard result limit, which is why it serves as the fallback for
// the credentialed provider.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::info;

use quarry_common::SearchHit;

use crate::traits::WebSearcher;

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

/// DDG serves an empty shell to clients without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct DdgSearcher {
    client: reqwest::Client,
}

impl DdgSearcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for DdgSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSearcher for DdgSearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        info!(query, max_results, provider = "ddg", "Searching");

        // kl=wt-wt: worldwide region; kp=-2: safe search off; df=y: past year.
        let url = format!(
            "{SEARCH_URL}?q={}&kl=wt-wt&kp=-2&df=y",
            urlencoding::encode(query)
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("DuckDuckGo request failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("DuckDuckGo returned status {status}");
        }

        let html = resp.text().await.context("DuckDuckGo body read failed")?;
        let hits = parse_results(&html, max_results);

        info!(query, count = hits.len(), provider = "ddg", "Search complete");
        Ok(hits)
    }
}

/// Pull `{href, body}` pairs out of a DDG HTML results page.
fn parse_results(html: &str, max_results: usize) -> Vec<SearchHit> {
    let result_sel = Selector::parse(".result").expect("valid selector");
    let link_sel = Selector::parse(".result__title a").expect("valid selector");
    let snippet_sel = Selector::parse(".result__snippet").expect("valid selector");

    let document = Html::parse_document(html);
    let mut hits = Vec::new();

    for result in document.select(&result_sel) {
        if hits.len() >= max_results {
            break;
        }

        let Some(link) = result.select(&link_sel).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href").and_then(clean_redirect_url) else {
            continue;
        };

        let body = result
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        hits.push(SearchHit { href, body });
    }

    hits
}

/// DDG wraps result links in a redirect: `//duckduckgo.com/l/?uddg=<url>&rut=..`.
/// Unwrap to the target URL; direct http(s) links pass through.
fn clean_redirect_url(href: &str) -> Option<String> {
    if let Some(idx) = href.find("uddg=") {
        let encoded = &href[idx + 5..];
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        return urlencoding::decode(encoded).ok().map(|s| s.into_owned());
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="result">
            <h2 class="result__title">
              <a href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fone&rut=abc">One</a>
            </h2>
            <a class="result__snippet">First snippet</a>
          </div>
          <div class="result">
            <h2 class="result__title">
              <a href="https://example.com/two">Two</a>
            </h2>
            <a class="result__snippet">Second  snippet</a>
          </div>
          <div class="result">
            <h2 class="result__title">
              <a href="/relative/nonsense">Three</a>
            </h2>
          </div>
        </body></html>
    "#;

    #[test]
    fn parses_results_and_unwraps_redirects() {
        let hits = parse_results(RESULTS_PAGE, 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].href, "https://example.com/one");
        assert_eq!(hits[0].body, "First snippet");
        assert_eq!(hits[1].href, "https://example.com/two");
    }

    #[test]
    fn respects_max_results() {
        let hits = parse_results(RESULTS_PAGE, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].href, "https://example.com/one");
    }

    #[test]
    fn redirect_cleanup() {
        assert_eq!(
            clean_redirect_url("/l/?uddg=https%3A%2F%2Fx.example%2Fp&rut=42"),
            Some("https://x.example/p".to_string())
        );
        assert_eq!(
            clean_redirect_url("https://direct.example/"),
            Some("https://direct.example/".to_string())
        );
        assert_eq!(clean_redirect_url("/relative/path"), None);
    }
}
