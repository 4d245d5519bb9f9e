use thiserror::Error;

pub type MarketResult<T> = Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
