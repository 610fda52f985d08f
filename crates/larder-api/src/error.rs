use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Item not found")]
    NotFound,
    /// The spreadsheet failed or rejected the call; the message is passed through.
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<larder_core::Error> for AppError {
    fn from(error: larder_core::Error) -> Self {
        use larder_core::Error;

        match error {
            Error::NotFound(_) => Self::NotFound,
            Error::InvalidInput(message) => Self::BadRequest(message),
            Error::Sheets(_) | Error::Auth(_) | Error::Http(_) | Error::Api(_) => {
                Self::Upstream(error.to_string())
            }
            Error::Config(_) | Error::Serialization(_) => Self::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
