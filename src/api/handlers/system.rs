//! Service readiness handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::Database;
use crate::echo::Echo;

/// Readiness report
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` when the store answers, `unavailable` otherwise
    #[schema(example = "ok")]
    pub status: String,
}

/// Readiness check
///
/// Pings the store; reports 503 when it cannot be reached.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database, E: Echo + Send + Sync>(
    State(state): State<AppState<D, E>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.db().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}
