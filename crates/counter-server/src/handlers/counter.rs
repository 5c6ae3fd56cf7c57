//! Counter handlers (read and update).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::{ApiError, GET_FAILED, UPDATE_FAILED};
use crate::schema::counter::{CountResponse, CounterActionRequest};
use crate::state::AppState;

use super::run_blocking;

/// Returns the current count.
///
/// `GET /counter`
pub async fn get_counter(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let service = state.service.clone();
    let response = run_blocking(GET_FAILED, move || service.handle_get()).await?;
    Ok(Json(response))
}

/// Increments or decrements the counter.
///
/// `POST /counter` with `{"action": "increment" | "decrement"}`
pub async fn update_counter(
    State(state): State<AppState>,
    payload: Result<Json<CounterActionRequest>, JsonRejection>,
) -> Result<Json<CountResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let service = state.service.clone();
    let response = run_blocking(UPDATE_FAILED, move || {
        service.handle_post(req.action_str())
    })
    .await?;
    Ok(Json(response))
}
