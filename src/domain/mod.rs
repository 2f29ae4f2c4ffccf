//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain model of the shortener: the
//! [`entities::Mapping`] between an alias and a long URL, the typed
//! [`error::StoreError`] taxonomy, and the repository contract that the
//! infrastructure layer implements.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`error`] - Closed set of store-level failures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
