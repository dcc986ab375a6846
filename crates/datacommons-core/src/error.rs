use thiserror::Error;

/// Common error type shared across the Data Commons client crates.
#[derive(Error, Debug)]
pub enum DcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required field `{field}` in {context}")]
    MissingField { field: String, context: String },
}

pub type Result<T> = std::result::Result<T, DcError>;
