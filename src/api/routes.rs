//! Management route configuration.
//!
//! All routes here require Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, list_handler, save_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Mapping management routes.
///
/// # Endpoints
///
/// - `POST   /url` - Store a URL under a given or generated alias
/// - `GET    /url` - List every mapping
/// - `DELETE /url` - Delete by alias, by URL, or by the exact pair
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/url",
        get(list_handler).post(save_handler).delete(delete_handler),
    )
}
