use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request error: {0:#}")]
    Request(#[from] reqwest::Error),

    #[error("query serialization error: {0:#}")]
    Query(#[from] serde_qs::Error),

    #[error("API error {status}: {info}")]
    Api { status: String, info: String },
}
