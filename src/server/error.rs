use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::DmarcError;

/// Request rejection returned by the HTTP layer
///
/// Bodies are short plain-text messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid json")]
    InvalidJson,

    #[error("invalid email")]
    InvalidEmail,

    #[error("internal error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::InvalidEmail => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DmarcError> for ApiError {
    fn from(err: DmarcError) -> Self {
        match err {
            DmarcError::InvalidEmail { .. } => ApiError::InvalidEmail,
            other => {
                log::error!("Verification failed: {other}");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
