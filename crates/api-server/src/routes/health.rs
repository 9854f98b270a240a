//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    app: String,
    environment: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    info!("Health check accessed");
    Json(HealthResponse {
        status: "healthy",
        app: state.config().app_name.clone(),
        environment: state.config().app_env.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
