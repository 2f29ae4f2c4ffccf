//! Handler for the list endpoint.

use axum::{Json, extract::State};

use crate::api::dto::list::{ListResponse, MappingItem};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every live mapping.
///
/// # Endpoint
///
/// `GET /url`
///
/// # Response
///
/// ```json
/// { "data": [ { "alias": "promo", "url": "https://example.com" } ] }
/// ```
///
/// An empty store yields `{"data": []}`.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<ListResponse>, AppError> {
    let mappings = state.mapping_service.list().await?;

    tracing::debug!(count = mappings.len(), "Listed mappings");

    Ok(Json(ListResponse {
        data: mappings.into_iter().map(MappingItem::from).collect(),
    }))
}
