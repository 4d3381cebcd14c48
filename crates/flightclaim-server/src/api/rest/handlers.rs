//! API endpoint handlers

use super::extractors::QueryExtractor;
use super::relay::relay_fragments;
use super::types::*;
use crate::error::ServerError;
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use flightclaim_core::{FlightDetail, StatsSummary};
use tracing::info;
use uuid::Uuid;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Compensation eligibility endpoint
///
/// Streams plain text by default; `stream=false` returns the full answer as JSON.
pub(super) async fn compensation(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<CompensationParams>,
) -> Result<Response, ServerError> {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        flight_number = %params.flight_number,
        date = %params.date,
        stream = params.stream,
        "Received compensation request"
    );

    if !params.stream {
        let answer = state
            .assistant
            .compute_eligibility(&params.flight_number, &params.date)
            .await?;
        return Ok(Json(answer).into_response());
    }

    // Failures up to here still get a JSON error and status code
    let tokens = state
        .assistant
        .compute_eligibility_stream(&params.flight_number, &params.date)
        .await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(relay_fragments(tokens, request_id)),
    )
        .into_response())
}

/// Cancellation-reason endpoint
pub(super) async fn cancellation_reason(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<FlightParams>,
) -> Result<Json<CancellationReasonResponse>, ServerError> {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        flight_number = %params.flight_number,
        date = %params.date,
        "Received cancellation-reason request"
    );

    let reason = state
        .assistant
        .compute_cancellation_reason(&params.flight_number, &params.date)
        .await?;

    Ok(Json(CancellationReasonResponse {
        flight_number: params.flight_number,
        date: params.date,
        cancellation_reason: reason,
    }))
}

/// Historical delay statistics endpoint
pub(super) async fn flight_stats(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<FlightParams>,
) -> Result<Json<StatsSummary>, ServerError> {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        flight_number = %params.flight_number,
        date = %params.date,
        "Received flight-stats request"
    );

    let summary = state
        .assistant
        .compute_historical_stats(&params.flight_number, &params.date)
        .await?;

    info!(
        request_id = %request_id,
        "Aggregated {} flights ({} delayed, {} cancelled)",
        summary.total_flights,
        summary.delayed,
        summary.cancelled
    );
    Ok(Json(summary))
}

/// Flight-detail endpoint
pub(super) async fn flight_details(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<FlightParams>,
) -> Result<Json<FlightDetail>, ServerError> {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        flight_number = %params.flight_number,
        date = %params.date,
        "Received flight-details request"
    );

    let detail = state
        .assistant
        .compute_flight_details(&params.flight_number, &params.date)
        .await?;
    Ok(Json(detail))
}
