//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Mapping`] - A persisted alias to URL pair
//! - [`NewMapping`] - Input for creating a mapping
//! - [`DeleteTarget`] / [`DeleteOutcome`] - Resolved delete request and its result

pub mod mapping;

pub use mapping::{DeleteOutcome, DeleteTarget, Mapping, NewMapping};
