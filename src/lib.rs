//! # Alias Shortener
//!
//! A URL shortener built with Axum and SQLite: short aliases map to long
//! URLs, and requests for an alias are redirected to its URL.
//!
//! ## Architecture
//!
//! This crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, store errors and repository trait
//! - **Application Layer** ([`application`]) - Alias assignment and deletion policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Caller-chosen or randomly generated aliases
//! - Delete by alias, by URL (all aliases at once), or by the exact pair
//! - Basic auth on the management routes
//! - Structured logging in text or JSON
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_USER=admin HTTP_PASSWORD=secret
//! export STORAGE_PATH=./storage/storage.db
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MappingService, SavedMapping};
    pub use crate::domain::StoreError;
    pub use crate::domain::entities::{DeleteOutcome, DeleteTarget, Mapping, NewMapping};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, Credentials};
}
