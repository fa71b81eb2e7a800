use thiserror::Error;

/// Errors emitted by the synthesis engine and exporters.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("mapping error: {0}")]
    Mapping(#[from] docsmith_core::Error),
    #[error("invalid overrides: {0}")]
    InvalidOverrides(String),
}
