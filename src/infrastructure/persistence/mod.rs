//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against a SQLite database.
//!
//! # Contents
//!
//! - [`pool`] - Connection pool setup and embedded migrations
//! - [`SqliteMappingRepository`] - Mapping storage and retrieval

pub mod pool;
pub mod sqlite_mapping_repository;

pub use pool::{MIGRATOR, PoolSettings, connect, connect_in_memory};
pub use sqlite_mapping_repository::SqliteMappingRepository;
