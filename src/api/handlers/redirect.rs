//! Handler for short alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::info;

use crate::domain::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// The stored URL is sent verbatim in `Location` with `302 Found`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 500 if the stored URL can't be sent as a header value.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = match state.mapping_service.resolve(&alias).await {
        Ok(url) => url,
        Err(StoreError::NotFound) => {
            info!(alias = %alias, "Alias not found");
            return Err(AppError::not_found(
                format!("not found alias with this name: '{alias}'"),
                json!({ "alias": alias }),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let location = HeaderValue::from_str(&url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "alias": alias }),
        )
    })?;

    info!(alias = %alias, url = %url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
