//! SQLite implementation of mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::error::StoreError;
use crate::domain::repositories::MappingRepository;

/// SQLite repository for mapping storage and retrieval.
///
/// Uses bound parameters for every statement; no SQL is built from input.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MappingRow {
    id: i64,
    alias: String,
    url: String,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.id, row.alias, row.url)
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn save(&self, new_mapping: NewMapping) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(&new_mapping.url)
            .bind(&new_mapping.alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    StoreError::AliasConflict(new_mapping.alias.clone())
                } else {
                    StoreError::Storage(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn enumerate(&self) -> Result<Vec<Mapping>, StoreError> {
        let rows = sqlx::query_as::<_, MappingRow>("SELECT id, alias, url FROM url ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Mapping::from).collect())
    }

    async fn resolve_pair(&self, alias: &str, url: &str) -> Result<Mapping, StoreError> {
        sqlx::query_as::<_, MappingRow>(
            "SELECT id, alias, url FROM url WHERE alias = ? AND url = ?",
        )
        .bind(alias)
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?
        .map(Mapping::from)
        .ok_or(StoreError::NotFound)
    }

    async fn delete_by_alias_and_url(&self, alias: &str, url: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ? AND url = ?")
            .bind(alias)
            .bind(url)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_by_url(&self, url: &str) -> Result<Vec<String>, StoreError> {
        // Single statement: the returned aliases are exactly the rows removed.
        let mut aliases =
            sqlx::query_scalar::<_, String>("DELETE FROM url WHERE url = ? RETURNING alias")
                .bind(url)
                .fetch_all(self.pool.as_ref())
                .await?;

        aliases.sort();

        Ok(aliases)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
