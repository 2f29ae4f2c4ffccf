//! DTOs for the list endpoint.

use serde::Serialize;

use crate::domain::entities::Mapping;

/// A single alias to URL pair. The surrogate id is not exposed.
#[derive(Debug, Serialize)]
pub struct MappingItem {
    pub alias: String,
    pub url: String,
}

impl From<Mapping> for MappingItem {
    fn from(mapping: Mapping) -> Self {
        Self {
            alias: mapping.alias,
            url: mapping.url,
        }
    }
}

/// All live mappings.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<MappingItem>,
}
