use crate::{models::HealthResponse, AppState};
use axum::{extract::State, http::StatusCode, response::Json as ResponseJson};

/// Health check endpoint
///
/// Requires no authentication; reports which providers picked up a
/// credential so operators can verify the deployed configuration.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, ResponseJson<HealthResponse>) {
    (
        StatusCode::OK,
        ResponseJson(HealthResponse {
            status: "ok".to_string(),
            version: option_env!("CARGO_PKG_VERSION").map(|v| v.to_string()),
            providers: state
                .registry
                .enabled_vendors()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }),
    )
}
