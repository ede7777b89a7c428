//! HTTP request handlers for the Rental Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::decompose;
use crate::error::EngineResult;
use crate::models::RatePlan;

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request and returns the priced cost breakdown.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the usage period from the request fields
    let period = match request.period.resolve() {
        Ok(period) => period,
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Invalid period");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(message)),
            )
                .into_response();
        }
    };

    // Resolve the rate plan: catalog asset or inline rates, exactly one
    let (plan, asset_id): (EngineResult<RatePlan>, Option<String>) =
        match (request.asset_id, request.rates) {
            (Some(id), None) => (state.catalog().rate_plan(&id), Some(id)),
            (None, Some(rates)) => (Ok(rates.into()), None),
            (Some(_), Some(_)) => {
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(ApiError::validation_error(
                        "provide either asset_id or rates, not both",
                    )),
                )
                    .into_response();
            }
            (None, None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(ApiError::validation_error(
                        "provide asset_id or inline rates",
                    )),
                )
                    .into_response();
            }
        };

    let plan = match plan {
        Ok(plan) => plan,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Asset lookup failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Normalize and price
    let result = period
        .normalized_days()
        .and_then(|duration_days| Ok((duration_days, decompose(duration_days, &plan)?)));

    match result {
        Ok((duration_days, breakdown)) => {
            info!(
                correlation_id = %correlation_id,
                duration_days,
                total_cost = %breakdown.total_cost,
                savings = %breakdown.savings,
                "Quote calculated"
            );
            let currency = asset_id
                .as_ref()
                .map(|_| state.catalog().metadata().currency.clone());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(QuoteResponse {
                    asset_id,
                    currency,
                    duration_days,
                    breakdown,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
