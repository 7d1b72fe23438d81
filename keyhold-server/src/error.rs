use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Missing header, malformed credential, or failed signature check.
    /// One variant on purpose: the client never learns which sub-check
    /// failed.
    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized: a valid signed event is required".to_string(),
            ),
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.to_string()),
            ServerError::NotFound => (StatusCode::NOT_FOUND, "file not found".to_string()),
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
