//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{EventRecord, OpenAlert};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// Build the router without transport layers so tests can drive it directly.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/products/:id/events", get(get_product_events))
        .route("/alerts", get(get_open_alerts))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub product_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub count: usize,
    pub alerts: Vec<OpenAlert>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: IndexerError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /products/:id/events`
///
/// Returns the indexed custody trail for the given product identifier.
pub async fn get_product_events(
    State(state): State<Arc<ApiState>>,
    Path(product_id): Path<String>,
) -> Response {
    match db::get_events_for_product(&state.pool, &product_id).await {
        Ok(events) => Json(EventsResponse {
            product_id,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /events`
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_all_events(&state.pool).await {
        Ok(events) => Json(AllEventsResponse {
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /alerts`
///
/// Products with a stale-custody alert that no admin has reset yet.
pub async fn get_open_alerts(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_open_alerts(&state.pool).await {
        Ok(alerts) => Json(AlertsResponse {
            count: alerts.len(),
            alerts,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}
