// Strategy routing: URL pattern matching into a content family.

/// Which extractor handles a URL. Determined from the URL string alone
/// (no HTTP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    Pdf,
    AcademicPaper,
    Encyclopedia,
    GenericWeb,
}

/// Classify a URL into its content family. Pure and total — anything
/// unmatched falls through to `GenericWeb`.
///
/// Precedence matters: a `.pdf` URL hosted on arxiv.org is `Pdf`, not
/// `AcademicPaper`, because the suffix rule is checked first.
pub fn classify(url: &str) -> ContentFamily {
    if url.ends_with(".pdf") {
        return ContentFamily::Pdf;
    }
    if url.contains("arxiv.org") {
        return ContentFamily::AcademicPaper;
    }
    if url.contains("wikipedia.org") {
        return ContentFamily::Encyclopedia;
    }
    ContentFamily::GenericWeb
}
