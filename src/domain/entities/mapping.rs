//! Mapping entity representing an alias bound to a long URL.

use crate::domain::error::StoreError;

/// A live alias to URL mapping.
///
/// `id` is a surrogate key assigned by the store. It is never used as a
/// lookup or delete key by callers; only `alias` and `url` are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub alias: String,
    pub url: String,
}

/// Which deletion semantics a delete request resolves to.
///
/// Built from the optional `alias` / `url` pair of a request by
/// [`DeleteTarget::from_parts`]; empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Delete the single mapping matching both fields exactly.
    Pair { alias: String, url: String },
    /// Delete the single mapping with this alias.
    Alias(String),
    /// Delete every mapping pointing at this URL.
    Url(String),
}

impl DeleteTarget {
    /// Resolves partial delete input into a target.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] when neither field is present.
    pub fn from_parts(alias: Option<String>, url: Option<String>) -> Result<Self, StoreError> {
        let alias = alias.filter(|a| !a.is_empty());
        let url = url.filter(|u| !u.is_empty());

        match (alias, url) {
            (Some(alias), Some(url)) => Ok(Self::Pair { alias, url }),
            (Some(alias), None) => Ok(Self::Alias(alias)),
            (None, Some(url)) => Ok(Self::Url(url)),
            (None, None) => Err(StoreError::InvalidInput(
                "empty params 'alias' and 'url'".to_string(),
            )),
        }
    }
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One mapping was removed (pair or alias delete).
    Single { alias: String, url: String },
    /// All mappings sharing `url` were removed.
    Bulk { url: String, aliases: Vec<String> },
}
