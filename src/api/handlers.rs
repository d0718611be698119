//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{DEFAULT_CURVE_STEPS, evaluate, generate_curve, run_scenarios};
use crate::models::CalculationRequest;

use super::request::TaxRequest;
use super::response::{ApiError, ApiErrorResponse, PresetSummary};
use super::state::AppState;

/// Upper bound for the `steps` query parameter of `/curve`.
pub const MAX_CURVE_STEPS: u32 = 200;

/// Query parameters of the `/curve` endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurveParams {
    /// Number of increments between 50 % and 150 %.
    pub steps: Option<u32>,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/simulate", post(simulate_handler))
        .route("/curve", post(curve_handler))
        .route("/presets", get(list_presets_handler))
        .route("/presets/:name", get(get_preset_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a tax request and returns a single gross-to-net result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_request(correlation_id, payload, state.reference_year()) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let result = evaluate(&request, state.reference_year(), state.constants());

    info!(
        correlation_id = %correlation_id,
        state = %request.state,
        gross_income = %result.gross_income,
        net_income = %result.net_income,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    json_ok(&result)
}

/// Handler for POST /simulate endpoint.
///
/// Returns the four part-time variants of the request.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario request");

    let request = match parse_request(correlation_id, payload, state.reference_year()) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let scenarios = run_scenarios(&request, state.reference_year(), state.constants());

    info!(
        correlation_id = %correlation_id,
        scenarios = scenarios.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Scenarios completed successfully"
    );
    json_ok(&scenarios)
}

/// Handler for POST /curve endpoint.
///
/// Returns `steps + 1` points sweeping gross income from 50 % to 150 %.
async fn curve_handler(
    State(state): State<AppState>,
    params: Result<Query<CurveParams>, QueryRejection>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing curve request");

    let steps = match params {
        Ok(Query(params)) => params.steps.unwrap_or(DEFAULT_CURVE_STEPS),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return ApiErrorResponse::bad_request(ApiError::invalid_field(
                "steps",
                &format!("must be an integer between 1 and {}", MAX_CURVE_STEPS),
            ))
            .into_response();
        }
    };

    if !(1..=MAX_CURVE_STEPS).contains(&steps) {
        warn!(correlation_id = %correlation_id, steps, "Curve steps out of range");
        return ApiErrorResponse::bad_request(ApiError::invalid_field(
            "steps",
            &format!("must be between 1 and {}, got {}", MAX_CURVE_STEPS, steps),
        ))
        .into_response();
    }

    let request = match parse_request(correlation_id, payload, state.reference_year()) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    let curve = generate_curve(&request, state.reference_year(), steps, state.constants());

    info!(
        correlation_id = %correlation_id,
        points = curve.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Curve completed successfully"
    );
    json_ok(&curve)
}

/// Handler for GET /presets endpoint.
async fn list_presets_handler(State(state): State<AppState>) -> Response {
    let presets: Vec<PresetSummary> = state
        .config()
        .presets()
        .presets
        .iter()
        .map(|(name, preset)| PresetSummary::new(name, preset))
        .collect();

    json_ok(&presets)
}

/// Handler for GET /presets/:name endpoint.
async fn get_preset_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.config().preset(&name) {
        Ok(preset) => json_ok(&PresetSummary::new(&name, preset)),
        Err(err) => {
            warn!(preset = %name, "Unknown preset requested");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Extracts and validates the request body.
fn parse_request(
    correlation_id: Uuid,
    payload: Result<Json<TaxRequest>, JsonRejection>,
    reference_year: i32,
) -> Result<CalculationRequest, ApiErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                // Syntactically valid JSON with a missing field or wrong type
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                ApiError::validation_error(body_text)
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::bad_request(error)
    })?;

    request.validate(reference_year).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        ApiErrorResponse::from(err)
    })
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
