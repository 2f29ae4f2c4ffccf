#![allow(dead_code)]

use alias_shortener::application::services::MappingService;
use alias_shortener::infrastructure::persistence::SqliteMappingRepository;
use alias_shortener::state::{AppState, Credentials};
use alias_shortener::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

pub async fn create_test_mapping(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn aliases_for_url(pool: &SqlitePool, url: &str) -> Vec<String> {
    sqlx::query_scalar("SELECT alias FROM url WHERE url = ? ORDER BY alias")
        .bind(url)
        .fetch_all(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    let mapping_service = Arc::new(MappingService::with_generator(
        repository,
        AliasGenerator::with_rng(StdRng::seed_from_u64(42)),
        DEFAULT_ALIAS_LENGTH,
    ));

    AppState::new(mapping_service, Credentials::new(TEST_USER, TEST_PASSWORD))
}
