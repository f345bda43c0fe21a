use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
