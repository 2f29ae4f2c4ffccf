//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation and alias validation

pub mod alias_generator;
