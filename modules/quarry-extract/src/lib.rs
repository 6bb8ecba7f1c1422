pub mod batch;
pub mod extract;
pub mod quality;
pub mod router;
pub mod search;
pub mod traits;

pub use batch::{extract_batch, MAX_CONCURRENT_EXTRACTIONS};
pub use extract::ExtractService;
pub use quality::{is_substantial, MIN_CONTENT_CHARS};
pub use router::{classify, ContentFamily};
pub use search::{DdgSearcher, SearchDispatcher, TavilySearcher};
pub use traits::{ContentSource, WebSearcher};
