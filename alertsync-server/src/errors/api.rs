use axum::extract::rejection::JsonRejection;

use super::SyncError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Sync error: {0}")]
    SyncError(#[from] SyncError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected payload: {}", rejection.body_text());
        ApiError::SyncError(rejection.into())
    }
}
