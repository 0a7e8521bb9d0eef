use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;

/// Readiness endpoint that pings the database.
///
/// Liveness (`/health`) only proves the process is up; this proves the
/// service can actually reach PostgreSQL.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready_handler)).with_state(db)
}

async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    match database::postgres::check_health(&db).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))).into_response(),
        Err(e) => {
            tracing::error!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}
