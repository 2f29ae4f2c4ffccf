mod common;

use alias_shortener::domain::StoreError;
use alias_shortener::domain::entities::NewMapping;
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::infrastructure::persistence::{
    PoolSettings, SqliteMappingRepository, connect, connect_in_memory,
};
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_mapping(alias: &str, url: &str) -> NewMapping {
    NewMapping {
        alias: alias.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_save_and_resolve(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let id = repo
        .save(new_mapping("promo", "https://example.com/landing?utm=1"))
        .await
        .unwrap();

    assert!(id > 0);

    let url = repo.resolve("promo").await.unwrap();
    assert_eq!(url, "https://example.com/landing?utm=1");
}

#[sqlx::test]
async fn test_save_returns_increasing_ids(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let first = repo.save(new_mapping("a1", "https://a.example")).await.unwrap();
    let second = repo.save(new_mapping("a2", "https://a.example")).await.unwrap();

    assert!(second > first);
}

#[sqlx::test]
async fn test_ids_not_reused_after_delete(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let a = repo.save(new_mapping("a", "https://a.example")).await.unwrap();
    let b = repo.save(new_mapping("b", "https://b.example")).await.unwrap();
    assert!(b > a);

    repo.delete_by_alias("b").await.unwrap();

    let c = repo.save(new_mapping("c", "https://c.example")).await.unwrap();

    assert!(c > b, "id {c} reused after deleting id {b}");
}

#[sqlx::test]
async fn test_save_duplicate_alias_conflicts(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    repo.save(new_mapping("taken", "https://first.example"))
        .await
        .unwrap();

    let result = repo.save(new_mapping("taken", "https://second.example")).await;

    assert!(matches!(result, Err(StoreError::AliasConflict(alias)) if alias == "taken"));
    assert_eq!(repo.resolve("taken").await.unwrap(), "https://first.example");
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_alias_is_case_sensitive(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    repo.save(new_mapping("Promo", "https://upper.example"))
        .await
        .unwrap();
    repo.save(new_mapping("promo", "https://lower.example"))
        .await
        .unwrap();

    assert_eq!(repo.resolve("Promo").await.unwrap(), "https://upper.example");
    assert_eq!(repo.resolve("promo").await.unwrap(), "https://lower.example");
}

#[sqlx::test]
async fn test_resolve_not_found(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let result = repo.resolve("missing").await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[sqlx::test]
async fn test_enumerate_empty(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let mappings = repo.enumerate().await.unwrap();

    assert!(mappings.is_empty());
}

#[sqlx::test]
async fn test_enumerate_in_insertion_order(pool: SqlitePool) {
    common::create_test_mapping(&pool, "b", "https://b.example").await;
    common::create_test_mapping(&pool, "a", "https://a.example").await;
    common::create_test_mapping(&pool, "c", "https://b.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool));
    let mappings = repo.enumerate().await.unwrap();

    let aliases: Vec<&str> = mappings.iter().map(|m| m.alias.as_str()).collect();
    assert_eq!(aliases, vec!["b", "a", "c"]);
    assert_eq!(mappings[2].url, "https://b.example");
}

#[sqlx::test]
async fn test_resolve_pair(pool: SqlitePool) {
    common::create_test_mapping(&pool, "pair", "https://pair.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let mapping = repo
        .resolve_pair("pair", "https://pair.example")
        .await
        .unwrap();
    assert_eq!(mapping.alias, "pair");
    assert_eq!(mapping.url, "https://pair.example");

    let mismatch = repo.resolve_pair("pair", "https://other.example").await;
    assert!(matches!(mismatch, Err(StoreError::NotFound)));
}

#[sqlx::test]
async fn test_delete_by_alias_and_url(pool: SqlitePool) {
    common::create_test_mapping(&pool, "x", "https://x.example").await;
    common::create_test_mapping(&pool, "y", "https://x.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    repo.delete_by_alias_and_url("x", "https://x.example")
        .await
        .unwrap();

    assert!(matches!(repo.resolve("x").await, Err(StoreError::NotFound)));
    assert_eq!(
        common::aliases_for_url(&pool, "https://x.example").await,
        vec!["y"]
    );
}

#[sqlx::test]
async fn test_delete_by_alias_and_url_mismatch_removes_nothing(pool: SqlitePool) {
    common::create_test_mapping(&pool, "x", "https://x.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    let result = repo
        .delete_by_alias_and_url("x", "https://other.example")
        .await;

    assert!(matches!(result, Err(StoreError::NotFound)));
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_delete_by_alias(pool: SqlitePool) {
    common::create_test_mapping(&pool, "gone", "https://gone.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    repo.delete_by_alias("gone").await.unwrap();

    assert_eq!(common::count_mappings(&pool).await, 0);

    let again = repo.delete_by_alias("gone").await;
    assert!(matches!(again, Err(StoreError::NotFound)));
}

#[sqlx::test]
async fn test_delete_by_url_removes_all_aliases(pool: SqlitePool) {
    common::create_test_mapping(&pool, "k2", "https://shared.example").await;
    common::create_test_mapping(&pool, "k1", "https://shared.example").await;
    common::create_test_mapping(&pool, "keep", "https://other.example").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    let removed = repo.delete_by_url("https://shared.example").await.unwrap();

    assert_eq!(removed, vec!["k1", "k2"]);
    assert!(
        common::aliases_for_url(&pool, "https://shared.example")
            .await
            .is_empty()
    );
    assert_eq!(repo.resolve("keep").await.unwrap(), "https://other.example");
}

#[sqlx::test]
async fn test_delete_by_url_no_match(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let removed = repo.delete_by_url("https://nobody.example").await.unwrap();

    assert!(removed.is_empty());
}

#[sqlx::test]
async fn test_alias_reusable_after_delete(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    repo.save(new_mapping("reuse", "https://old.example"))
        .await
        .unwrap();
    repo.delete_by_alias("reuse").await.unwrap();
    repo.save(new_mapping("reuse", "https://new.example"))
        .await
        .unwrap();

    assert_eq!(repo.resolve("reuse").await.unwrap(), "https://new.example");
}

#[sqlx::test]
async fn test_ping(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_ping_fails_on_closed_pool(pool: SqlitePool) {
    pool.close().await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert!(matches!(repo.ping().await, Err(StoreError::Storage(_))));
}

#[tokio::test]
async fn test_in_memory_pool_is_migrated() {
    let pool = connect_in_memory().await.unwrap();
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    repo.save(new_mapping("mem", "https://mem.example"))
        .await
        .unwrap();

    assert_eq!(repo.resolve("mem").await.unwrap(), "https://mem.example");
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = std::env::temp_dir().join(format!("alias-shortener-{}", std::process::id()));
    let path = dir.join("nested").join("storage.db");
    let database_url = format!("sqlite://{}", path.display());

    let pool = connect(&database_url, &PoolSettings::default())
        .await
        .unwrap();
    alias_shortener::infrastructure::persistence::MIGRATOR
        .run(&pool)
        .await
        .unwrap();

    assert!(path.exists());

    pool.close().await;
    std::fs::remove_dir_all(&dir).unwrap();
}
