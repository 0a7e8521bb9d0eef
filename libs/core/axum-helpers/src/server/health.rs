use axum::{extract::State, routing::get, Json, Router};
use core_config::AppInfo;
use serde::Serialize;

/// Liveness response with app name and version
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

async fn health(State(info): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: info.name,
        version: info.version,
    })
}

/// Router exposing the `/health` liveness endpoint.
///
/// Readiness (`/ready`) is app-specific: the app wires its own handler
/// with real dependency checks.
pub fn health_router(info: AppInfo) -> Router {
    Router::new().route("/health", get(health)).with_state(info)
}
