use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the datastore layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt datastore: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("corrupt balance for player {0}")]
    BadBalance(i64),
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    /// 422 with a plain-text list of the failing field names.
    InvalidFields(String),
    /// 422 with an empty body.
    Unprocessable,
    BadRequest,
    Store(StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidFields(fields) => {
                (StatusCode::UNPROCESSABLE_ENTITY, fields).into_response()
            }
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
            ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Store(err) => {
                tracing::error!("datastore failure: {err}");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = Json(ErrorResponse {
                    error: status.to_string(),
                    message: err.to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}
