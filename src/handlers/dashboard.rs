use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::{catalog::DashboardSummary, state::AppState};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// Cards and chart series of the dashboard landing page
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.catalog.summary())
}
