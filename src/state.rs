//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// Basic auth credentials guarding the management routes.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns true if the presented pair matches.
    ///
    /// A missing password never matches.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<SqliteMappingRepository>>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(
        mapping_service: Arc<MappingService<SqliteMappingRepository>>,
        credentials: Credentials,
    ) -> Self {
        Self {
            mapping_service,
            credentials: Arc::new(credentials),
        }
    }
}
