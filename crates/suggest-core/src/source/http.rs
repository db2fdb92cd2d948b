use reqwest::{blocking::Client, Url};

use crate::config::Settings;
use crate::error::SourceError;
use crate::types::{Origin, SearchResponse, SourceResponse};

use super::{fallback_response, SuggestionSource};

const TARGET: &str = "suggest_core::source";

/// Product search over HTTP: `GET <endpoint>?q=<query>`.
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(settings: &Settings) -> Result<Self, SourceError> {
        let endpoint = Url::parse(settings.endpoint.trim())
            .map_err(|e| SourceError::Endpoint(format!("{}: {e}", settings.endpoint)))?;
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(format!("suggest/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn request(&self, query: &str) -> Result<SearchResponse, SourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl SuggestionSource for HttpSource {
    fn fetch(&self, query: &str) -> SourceResponse {
        match self.request(query) {
            Ok(resp) if !resp.products.is_empty() => {
                tracing::debug!(target: TARGET, query, count = resp.products.len(), "live results");
                SourceResponse {
                    products: resp.products,
                    origin: Origin::Live,
                }
            }
            Ok(_) => {
                tracing::debug!(target: TARGET, query, "endpoint returned no products; using fallback");
                fallback_response()
            }
            Err(e) => {
                tracing::warn!(target: TARGET, query, "suggestion fetch failed, using fallback: {e}");
                fallback_response()
            }
        }
    }
}
