use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::{
    api::error::ApiError,
    domain::{Allocation, DispatchRequest},
    state::AppState,
};

/// POST /productionplan - Compute how much each plant must produce
///
/// Responds with one `{name, p}` entry per plant, cheapest plant first.
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/productionplan",
    request_body = DispatchRequest,
    responses(
        (status = 200, description = "Production plan", body = Vec<Allocation>),
        (status = 400, description = "Malformed or invalid request", body = crate::api::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::api::error::ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Plan could not be computed", body = crate::api::error::ErrorResponse),
    ),
    tag = "planner"
))]
pub async fn production_plan(
    State(state): State<AppState>,
    payload: Result<Json<DispatchRequest>, JsonRejection>,
) -> Result<Json<Vec<Allocation>>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let started = Instant::now();
    let plan = state.planner.plan(&request)?;

    tracing::info!(
        strategy = state.planner.strategy_name(),
        load = request.load,
        plants = plan.len(),
        duration_us = started.elapsed().as_micros() as u64,
        "production plan served"
    );

    Ok(Json(plan))
}
