// Generic web-page extraction: fetch, render to text, normalize whitespace.

use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};
use tracing::{info, warn};

pub(crate) struct WebExtractor {
    client: reqwest::Client,
}

impl WebExtractor {
    pub(crate) fn new() -> Self {
        // Invalid/self-signed certificates are accepted on purpose: plenty
        // of small sites worth scraping have broken TLS.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch a page and return its whole-page text content with template
    /// whitespace collapsed.
    pub(crate) async fn extract(&self, url: &str) -> Result<String> {
        info!(url, extractor = "web", "Fetching page");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Page fetch failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Page fetch for {url} returned status {status}");
        }

        let html = resp.text().await.context("Page body read failed")?;
        if html.is_empty() {
            warn!(url, extractor = "web", "Empty page body");
            return Ok(String::new());
        }

        let text = html_to_text(&html, url);
        let normalized = normalize_whitespace(&text);

        info!(
            url,
            extractor = "web",
            chars = normalized.len(),
            "Extracted page text"
        );
        Ok(normalized)
    }
}

/// Convert raw HTML into text. Whole-page conversion, not main-content
/// extraction — boilerplate is handled by whitespace normalization, not
/// by dropping page regions.
fn html_to_text(html: &str, url: &str) -> String {
    let parsed_url = url::Url::parse(url).ok();
    let config = TransformConfig {
        readability: false,
        main_content: false,
        return_format: ReturnFormat::Markdown,
        filter_images: true,
        filter_svg: true,
        clean_html: true,
    };
    let input = TransformInput {
        url: parsed_url.as_ref(),
        content: html.as_bytes(),
        screenshot_bytes: None,
        encoding: None,
        selector_config: None,
        ignore_tags: None,
    };

    transform_content_input(input, &config)
}

/// Collapse every run of 3-or-more whitespace characters into exactly two
/// spaces. Runs of 1–2 are left untouched so paragraph breaks survive.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let run_re = Regex::new(r"\s{3,}").expect("valid regex");
    run_re.replace_all(text, "  ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_long_runs_to_two_spaces() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a  b");
    }

    #[test]
    fn run_of_exactly_three_collapses() {
        assert_eq!(normalize_whitespace("b   c"), "b  c");
    }

    #[test]
    fn short_runs_untouched() {
        assert_eq!(normalize_whitespace("a b  c"), "a b  c");
        assert_eq!(normalize_whitespace("a\nb"), "a\nb");
    }

    #[test]
    fn mixed_whitespace_counts_as_one_run() {
        assert_eq!(normalize_whitespace("a \t\n b"), "a  b");
    }

    #[test]
    fn multiple_runs() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb   c"), "a  b  c");
    }
}
