//! Health probe endpoint.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(get_health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// GET /api/health - report store reachability.
///
/// Always answers 200; a broken store shows up as `database: disconnected`.
async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.store.probe() {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "OK",
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}
