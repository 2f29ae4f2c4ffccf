//! Handler for the delete endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::delete::{DeleteRequest, DeleteResponse};
use crate::domain::StoreError;
use crate::domain::entities::DeleteTarget;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes by alias, by URL, or by the exact pair.
///
/// # Endpoint
///
/// `DELETE /url`
///
/// # Behavior
///
/// | `alias` | `url` | Effect |
/// |---------|-------|--------|
/// | set     | set   | Deletes the mapping matching both exactly |
/// | set     | empty | Deletes the mapping with this alias |
/// | empty   | set   | Deletes **every** mapping pointing at the URL |
/// | empty   | empty | Rejected, nothing is deleted |
///
/// # Response
///
/// Single delete:
///
/// ```json
/// { "alias": "promo", "url": "https://example.com" }
/// ```
///
/// Bulk delete by URL:
///
/// ```json
/// { "url": "https://example.com", "aliases": ["promo", "x7Gh2k"] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if both fields are empty.
/// Returns 404 Not Found if nothing matched.
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let target = DeleteTarget::from_parts(payload.alias, payload.url)?;
    let details = match &target {
        DeleteTarget::Pair { alias, url } => json!({ "alias": alias, "url": url }),
        DeleteTarget::Alias(alias) => json!({ "alias": alias }),
        DeleteTarget::Url(url) => json!({ "url": url }),
    };

    match state.mapping_service.delete(target).await {
        Ok(outcome) => Ok(Json(DeleteResponse::from(outcome))),
        Err(StoreError::NotFound) => {
            tracing::info!(%details, "Nothing to delete");
            Err(AppError::not_found("not found", details))
        }
        Err(e) => Err(e.into()),
    }
}
