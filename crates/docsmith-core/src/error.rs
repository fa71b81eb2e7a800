use thiserror::Error;

/// Core error type shared across docsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The mapping file is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The mapping parsed but violates the expected shape.
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),
}

/// Convenience alias for results returned by docsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
