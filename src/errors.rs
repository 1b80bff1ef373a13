use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid short code")]
    InvalidShortCode,

    #[error("link not found")]
    LinkNotFound,

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("could not allocate a unique short code")]
    CodeSpaceExhausted,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUrl(_)
            | ApiError::InvalidShortCode
            | ApiError::InvalidPagination(_) => StatusCode::BAD_REQUEST,
            ApiError::LinkNotFound => StatusCode::NOT_FOUND,
            ApiError::CodeSpaceExhausted | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Server-side failures get logged in full; the caller only sees a
        // generic message.
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
