use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier as returned by the search endpoint; some feeds use
/// numbers, others strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: ProductId,
    pub title: String,
}

impl Suggestion {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ProductId::Number(id),
            title: title.into(),
        }
    }
}

fn default_products() -> Vec<Suggestion> {
    Vec::new()
}

/// Body of a product search response. Fields other than `products` are
/// informational and tolerated when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default = "default_products")]
    pub products: Vec<Suggestion>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Where a batch of suggestions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct SourceResponse {
    pub products: Vec<Suggestion>,
    pub origin: Origin,
}

/// Outcome of one fetch cycle as seen by the controller.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Live(Vec<Suggestion>),
    Fallback(Vec<Suggestion>),
    /// The pipeline broke outside the source's own recovery (worker panic,
    /// dropped channel).
    Failed(String),
}

impl From<SourceResponse> for FetchOutcome {
    fn from(resp: SourceResponse) -> Self {
        match resp.origin {
            Origin::Live => FetchOutcome::Live(resp.products),
            Origin::Fallback => FetchOutcome::Fallback(resp.products),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let body = r#"{"products":[{"id":1,"title":"iPhone 9","price":549},{"id":"sku-7","title":"Shampoo"}],"total":2}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.products.len(), 2);
        assert_eq!(resp.products[0].id, ProductId::Number(1));
        assert_eq!(resp.products[1].id, ProductId::Text("sku-7".into()));
        assert_eq!(resp.total, Some(2));
        assert_eq!(resp.skip, None);
    }

    #[test]
    fn missing_products_decodes_as_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.products.is_empty());
    }

    #[test]
    fn product_id_display() {
        assert_eq!(ProductId::Number(42).to_string(), "42");
        assert_eq!(ProductId::Text("abc".into()).to_string(), "abc");
    }
}
