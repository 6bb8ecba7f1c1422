use serde::{Deserialize, Serialize};

/// A URL that yielded usable extracted text.
///
/// Only produced for content that cleared the quality gate — the batch
/// pipeline never emits an entry with empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedContent {
    pub url: String,
    pub content: String,
}

/// A normalized web search result.
///
/// Both search providers map their native result shapes into this before
/// anything leaves the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub href: String,
    pub body: String,
}
