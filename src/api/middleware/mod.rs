//! HTTP middleware for request processing and protection.
//!
//! Provides Basic authentication and request tracing.

pub mod auth;
pub mod tracing;
