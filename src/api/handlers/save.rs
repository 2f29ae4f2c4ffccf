//! Handler for the save endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the given or a generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long", "alias": "promo" }
/// ```
///
/// `alias` is optional; when absent or empty a random 6-character
/// alphanumeric alias is generated.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "alias": "promo" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid.
/// Returns 409 Conflict if the alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let saved = state
        .mapping_service
        .save(payload.url, payload.alias)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse { alias: saved.alias }),
    ))
}
