use axum::{extract::State, http::StatusCode, Json};

use crate::methods::entities::HealthResponse;
use crate::methods::routes::SERVICE_HEALTH_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = SERVICE_HEALTH_PATH,
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database probe failed", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let status = state.health_service.check_health().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(HealthResponse::from(status)))
}
