use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::encoder::EncodeError;

pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error";

/// Failures of the QR endpoint. Rendered as plain-text bodies.
#[derive(Debug, Error)]
pub enum QrServiceError {
    #[error("Missing \"text\"")]
    MissingText,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl QrServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            QrServiceError::MissingText => StatusCode::BAD_REQUEST,
            QrServiceError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            QrServiceError::MissingText => "missing_text",
            QrServiceError::Encode(err) => err.kind(),
        }
    }
}

impl IntoResponse for QrServiceError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        };

        (self.status(), body).into_response()
    }
}
