/// Raised when a search response or one of its hits does not have the expected shape
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid search response: {0}")]
    Json(#[from] serde_json::Error),
}
