mod client;

pub use client::DsnSearchClient;

use noid_core::{SearchResult, ValidationError};

/// A search index that can be queried one term at a time
#[async_trait::async_trait]
pub trait SearchIndex: Send + Sync {
    /// Fetch the page of hits for `term`
    async fn search(&self, term: &str) -> Result<SearchResult, SearchError>;

    /// Index name, used in logs
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch for letter '{term}': HTTP {status}")]
    Status { term: String, status: u16 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
