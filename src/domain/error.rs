//! Store-level error taxonomy.

use thiserror::Error;

/// Failures surfaced by the mapping store and the mapping service.
///
/// The set is closed: callers match on the variant instead of comparing
/// against sentinel values.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live mapping matched the lookup or delete key.
    #[error("mapping not found")]
    NotFound,

    /// The alias is already taken by a live mapping.
    #[error("alias already exists: {0}")]
    AliasConflict(String),

    /// The request cannot be served as given (e.g. delete with no keys).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other persistence failure.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
