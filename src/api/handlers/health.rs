//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DependencyCheck, HealthReport};
use crate::state::AppState;

/// Reports whether the database answers a trivial query.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns `200 OK` when the database is reachable and
/// `503 Service Unavailable` otherwise:
///
/// ```json
/// {
///   "status": "degraded",
///   "version": "0.1.0",
///   "database": { "status": "error", "message": "Database unavailable" }
/// }
/// ```
///
/// The storage error is logged, never returned.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = match state.mapping_service.health_check().await {
        Ok(()) => DependencyCheck::ok(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            DependencyCheck::unavailable()
        }
    };

    let report = HealthReport::from_database(database);
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
