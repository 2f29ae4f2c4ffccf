//! Repository trait for alias to URL mapping storage.

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Repository interface owning persisted mappings.
///
/// Each method maps to one or a few independent statements against the
/// store. No method holds a transaction across calls, so read-then-delete
/// sequences composed by callers may race with concurrent writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasConflict`] if the alias is already taken.
    /// Returns [`StoreError::Storage`] on any other database error.
    async fn save(&self, new_mapping: NewMapping) -> Result<i64, StoreError>;

    /// Returns the URL stored for `alias`, verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping has this alias.
    async fn resolve(&self, alias: &str) -> Result<String, StoreError>;

    /// Lists every live mapping in ascending id order.
    ///
    /// An empty store yields an empty list.
    async fn enumerate(&self) -> Result<Vec<Mapping>, StoreError>;

    /// Finds the mapping matching both `alias` and `url` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] unless such a mapping exists.
    async fn resolve_pair(&self, alias: &str, url: &str) -> Result<Mapping, StoreError>;

    /// Deletes the mapping matching both fields exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row was deleted.
    async fn delete_by_alias_and_url(&self, alias: &str, url: &str) -> Result<(), StoreError>;

    /// Deletes the mapping with this alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row was deleted.
    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError>;

    /// Deletes every mapping pointing at `url` and returns their aliases.
    ///
    /// Zero matches is not an error here; the list is simply empty.
    async fn delete_by_url(&self, url: &str) -> Result<Vec<String>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
