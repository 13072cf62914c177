use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Invalid request payload: {reason}")]
    InvalidPayload { status: StatusCode, reason: String },
}

impl SyncError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SyncError::InvalidPayload { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for SyncError {
    fn from(rejection: JsonRejection) -> Self {
        SyncError::InvalidPayload {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}
