use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::health::HealthDto,
    server::{model::app::AppState, service::health::HealthService},
};

pub static HEALTH_TAG: &str = "health";

/// Report whether the server and its database are up
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server and database are reachable", body = HealthDto),
        (status = 503, description = "Database is unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health_service = HealthService::new(&state.db, state.retry_policy);

    let (status_code, status, database) = match health_service.ping_database().await {
        Ok(()) => (StatusCode::OK, "ok", true),
        Err(e) => {
            tracing::warn!("Health check failed to reach the database: {}", e);

            (StatusCode::SERVICE_UNAVAILABLE, "degraded", false)
        }
    };

    (
        status_code,
        Json(HealthDto {
            status: status.to_string(),
            database,
            checked_at: Utc::now(),
        }),
    )
        .into_response()
}
