//! Placeholder inference endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::Instrument;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::inference::{PredictRequest, PredictResponse};
use crate::observability::metrics;

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.engine.run(&request)?;

    metrics::record_prediction(state.engine.model_name(), response.predictions.len());

    // Fire-and-forget: the response never waits on this.
    let input_length = response.input.chars().count();
    let requested_top_k = request.top_k.unwrap_or(1);
    tokio::spawn(
        async move {
            tracing::info!(input_length, top_k = requested_top_k, "Prediction served");
        }
        .in_current_span(),
    );

    Ok(Json(response))
}
