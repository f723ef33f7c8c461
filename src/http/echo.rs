//! Root greeting and path-parameter echo.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub echo: String,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello from inference-api!".to_string(),
    })
}

/// GET /echo/{message}
pub async fn echo(Path(message): Path<String>) -> Json<EchoResponse> {
    Json(EchoResponse { echo: message })
}
