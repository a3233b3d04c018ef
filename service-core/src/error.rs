use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(anyhow::Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(anyhow::Error),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    /// Builds a client error from an extractor rejection, keeping the status
    /// axum picked for it.
    pub fn from_rejection(status: StatusCode, message: impl Into<String>) -> Self {
        let err = anyhow::Error::msg(message.into());
        match status {
            StatusCode::UNPROCESSABLE_ENTITY => AppError::UnprocessableEntity(err),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(err),
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(err),
            s if s.is_client_error() => AppError::BadRequest(err),
            _ => AppError::InternalError(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Every failure leaves the service as `{"detail": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            AppError::ValidationError(err) => err.to_string(),
            AppError::BadRequest(err)
            | AppError::UnprocessableEntity(err)
            | AppError::UnsupportedMediaType(err)
            | AppError::PayloadTooLarge(err) => err.to_string(),
            AppError::InternalError(err) | AppError::ConfigError(err) => {
                tracing::error!(error = %format!("{:#}", err), "Request failed");
                format!("{:#}", err)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
