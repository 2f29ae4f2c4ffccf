//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The redirect target (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Alias under which the URL was stored.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
}
