// Family-specific extractors behind one dispatch service.
//
// Every extractor returns `Result<String>`; containment (dropping a bad
// URL instead of failing the batch) is applied by the caller, not here.

mod arxiv;
mod pdf;
mod web;
mod wikipedia;

use anyhow::Result;
use async_trait::async_trait;

use crate::router::{classify, ContentFamily};
use crate::traits::ContentSource;

pub struct ExtractService {
    pdf: pdf::PdfExtractor,
    arxiv: arxiv::ArxivExtractor,
    wikipedia: wikipedia::WikipediaExtractor,
    web: web::WebExtractor,
}

impl ExtractService {
    pub fn new() -> Self {
        Self {
            pdf: pdf::PdfExtractor::new(),
            arxiv: arxiv::ArxivExtractor::new(),
            wikipedia: wikipedia::WikipediaExtractor::new(),
            web: web::WebExtractor::new(),
        }
    }

    /// Full-document PDF text, pages concatenated in order.
    pub async fn pdf_text(&self, url: &str) -> Result<String> {
        self.pdf.extract(url).await
    }

    /// arXiv extraction. The URL's kind segment picks the path:
    /// `abs` → abstract via the export API, `pdf` → the PDF extractor on
    /// the same URL, anything else → the generic web extractor.
    pub async fn arxiv_text(&self, url: &str) -> Result<String> {
        match trailing_segments(url) {
            Some(("abs", article_id)) => self.arxiv.abstract_text(article_id).await,
            Some(("pdf", _)) => self.pdf_text(url).await,
            _ => self.web_text(url).await,
        }
    }

    /// Wikipedia article text. Non-`wiki` kind segments yield empty text
    /// (no fallback).
    pub async fn wikipedia_text(&self, url: &str) -> Result<String> {
        match trailing_segments(url) {
            Some(("wiki", article_title)) => self.wikipedia.article_text(article_title).await,
            _ => Ok(String::new()),
        }
    }

    /// Whole-page text of an arbitrary web page, whitespace-normalized.
    pub async fn web_text(&self, url: &str) -> Result<String> {
        self.web.extract(url).await
    }
}

impl Default for ExtractService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for ExtractService {
    async fn extract(&self, url: &str) -> Result<String> {
        match classify(url) {
            ContentFamily::Pdf => self.pdf_text(url).await,
            ContentFamily::AcademicPaper => self.arxiv_text(url).await,
            ContentFamily::Encyclopedia => self.wikipedia_text(url).await,
            ContentFamily::GenericWeb => self.web_text(url).await,
        }
    }
}

/// Split off the last two path segments of a URL: the kind segment and
/// the identifier. "https://arxiv.org/abs/2409.02056" → ("abs", "2409.02056").
fn trailing_segments(url: &str) -> Option<(&str, &str)> {
    let trimmed = url.trim_end_matches('/');
    let mut parts = trimmed.rsplit('/');
    let identifier = parts.next()?;
    let kind = parts.next()?;
    if identifier.is_empty() || kind.is_empty() {
        return None;
    }
    Some((kind, identifier))
}
