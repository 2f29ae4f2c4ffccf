//! Business logic services for the application layer.

pub mod mapping_service;

pub use mapping_service::{MappingService, SavedMapping};
