//! DTOs for the delete endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeleteOutcome;

/// Delete request; at least one field must be non-empty.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Delete result.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DeleteResponse {
    /// A single mapping was removed.
    Single { alias: String, url: String },
    /// Every mapping for `url` was removed.
    Bulk { url: String, aliases: Vec<String> },
}

impl From<DeleteOutcome> for DeleteResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Single { alias, url } => Self::Single { alias, url },
            DeleteOutcome::Bulk { url, aliases } => Self::Bulk { url, aliases },
        }
    }
}
