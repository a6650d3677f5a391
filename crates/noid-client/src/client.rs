use std::time::Duration;

use async_trait::async_trait;
use noid_config::search::SearchConfig;
use noid_core::SearchResult;

use crate::{SearchError, SearchIndex};

/// Client for the DSN search API
#[derive(Clone)]
pub struct DsnSearchClient {
    client: reqwest::Client,
    base_url: String,
    source: String,
    from: u32,
    size: u32,
}

impl DsnSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            source: config.source.clone(),
            from: config.from,
            size: config.size,
        })
    }

    /// Query parameters for one term, in request order
    fn params(&self, term: &str) -> [(&'static str, String); 4] {
        [
            ("source", self.source.clone()),
            ("search", term.to_string()),
            ("from", self.from.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}

#[async_trait]
impl SearchIndex for DsnSearchClient {
    async fn search(&self, term: &str) -> Result<SearchResult, SearchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.params(term))
            .send()
            .await?;

        tracing::debug!("GET {}", response.url());

        if !response.status().is_success() {
            return Err(SearchError::Status {
                term: term.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(SearchResult::from_json(&body)?)
    }

    fn name(&self) -> &str {
        &self.source
    }
}
