use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricefeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Request errors
    #[error("url is not a valid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Catalog parsing failed: {0}")]
    CatalogParse(String),

    // Serialization errors
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    // Median errors
    #[error("Empty lists")]
    EmptyInput,
}

pub type PricefeedResult<T> = Result<T, PricefeedError>;
