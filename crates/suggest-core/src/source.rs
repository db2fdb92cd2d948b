mod fallback;
mod http;

pub use fallback::{fallback_products, fallback_response, StaticSource};
pub use http::HttpSource;

use crate::types::SourceResponse;

/// Anything that can answer a query with product suggestions.
///
/// Implementations must not fail: recoverable problems are resolved into the
/// fallback dataset before returning.
pub trait SuggestionSource: Send + Sync {
    fn fetch(&self, query: &str) -> SourceResponse;
}
