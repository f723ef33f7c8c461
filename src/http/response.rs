//! Error responses.
//!
//! Every failure leaves the service as `{"detail": "..."}` with the status
//! chosen by [`ApiError::status`].

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inference::PredictError;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Well-formed request that fails validation.
    #[error("{0}")]
    InvalidInput(String),

    /// Body could not be read as the expected JSON.
    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },

    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,

    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The request did not finish within `timeouts.request_secs`.
    #[error("Request Timeout")]
    RequestTimeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody { status, .. } => *status,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidInput(msg) => ApiError::InvalidInput(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request rejected");
        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Replaces the bare 408 that `TimeoutLayer` emits with a `{detail}` body.
pub async fn timeout_detail(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        return ApiError::RequestTimeout.into_response();
    }
    response
}
