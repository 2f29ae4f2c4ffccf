//! Mapping creation, resolution and deletion service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::StoreError;
use crate::domain::entities::{DeleteOutcome, DeleteTarget, Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH, validate_alias};

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMapping {
    pub id: i64,
    pub alias: String,
}

/// Service for creating, resolving and deleting alias mappings.
///
/// Supplies a generated alias when the caller gives none and decides, from
/// partial delete input, which of the three deletion semantics applies.
/// Conflicts and not-found conditions are returned immediately; nothing is
/// retried.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
    generator: AliasGenerator,
    alias_length: usize,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a service generating default-length aliases from an OS-seeded source.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_generator(repository, AliasGenerator::from_os_rng(), DEFAULT_ALIAS_LENGTH)
    }

    /// Creates a service with an explicit generator and alias length.
    pub fn with_generator(repository: Arc<R>, generator: AliasGenerator, alias_length: usize) -> Self {
        Self {
            repository,
            generator,
            alias_length,
        }
    }

    /// Persists `url` under `alias`, generating one when absent or empty.
    ///
    /// A generated alias that happens to collide is reported as a conflict
    /// like any other; the caller may simply retry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] if `url` is empty or the alias,
    /// supplied or generated, is malformed.
    /// Returns [`StoreError::AliasConflict`] if the alias is taken.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn save(&self, url: String, alias: Option<String>) -> Result<SavedMapping, StoreError> {
        if url.trim().is_empty() {
            return Err(StoreError::InvalidInput("url must not be empty".to_string()));
        }

        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(&alias)?;
                alias
            }
            None => {
                let generated = self.generator.generate(self.alias_length);
                validate_alias(&generated)?;
                debug!(alias = %generated, "Generated alias");
                generated
            }
        };

        let new_mapping = NewMapping {
            alias: alias.clone(),
            url,
        };

        let id = self.repository.save(new_mapping).await.inspect_err(|e| {
            if let StoreError::AliasConflict(_) = e {
                info!(alias = %alias, "Alias already exists");
            }
        })?;

        info!(id, alias = %alias, "Mapping saved");

        Ok(SavedMapping { id, alias })
    }

    /// Returns the URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.repository.resolve(alias).await
    }

    /// Lists every live mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn list(&self) -> Result<Vec<Mapping>, StoreError> {
        self.repository.enumerate().await
    }

    /// Deletes according to the resolved target.
    ///
    /// - [`DeleteTarget::Pair`]: the exact pair must exist, then it is removed.
    /// - [`DeleteTarget::Alias`]: the alias is resolved first so the outcome
    ///   can report the URL it pointed to, then removed.
    /// - [`DeleteTarget::Url`]: every mapping for the URL is removed; zero
    ///   removals is a not-found.
    ///
    /// The lookup and the delete are separate statements. A concurrent delete
    /// between them surfaces as [`StoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when nothing matched.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn delete(&self, target: DeleteTarget) -> Result<DeleteOutcome, StoreError> {
        match target {
            DeleteTarget::Pair { alias, url } => {
                let mapping = self.repository.resolve_pair(&alias, &url).await?;

                self.repository
                    .delete_by_alias_and_url(&mapping.alias, &mapping.url)
                    .await?;

                info!(alias = %mapping.alias, url = %mapping.url, "Alias and URL deleted");

                Ok(DeleteOutcome::Single {
                    alias: mapping.alias,
                    url: mapping.url,
                })
            }
            DeleteTarget::Alias(alias) => {
                let url = self.repository.resolve(&alias).await?;

                self.repository.delete_by_alias(&alias).await?;

                info!(alias = %alias, url = %url, "Mapping deleted by alias");

                Ok(DeleteOutcome::Single { alias, url })
            }
            DeleteTarget::Url(url) => {
                let aliases = self.repository.delete_by_url(&url).await?;

                if aliases.is_empty() {
                    return Err(StoreError::NotFound);
                }

                info!(url = %url, count = aliases.len(), "Mappings deleted by URL");

                Ok(DeleteOutcome::Bulk { url, aliases })
            }
        }
    }

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the store is unreachable.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
