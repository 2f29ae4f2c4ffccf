//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
}

/// State of a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeState {
    Ok,
    Error,
}

/// Result of checking one dependency. `message` never carries the
/// underlying error text.
#[derive(Debug, Serialize)]
pub struct DependencyCheck {
    pub status: ProbeState,
    pub message: &'static str,
}

impl DependencyCheck {
    pub fn ok() -> Self {
        Self {
            status: ProbeState::Ok,
            message: "Connected",
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: ProbeState::Error,
            message: "Database unavailable",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceState,
    pub version: &'static str,
    pub database: DependencyCheck,
}

impl HealthReport {
    /// Builds the report; the service is healthy iff the database is.
    pub fn from_database(database: DependencyCheck) -> Self {
        let status = match database.status {
            ProbeState::Ok => ServiceState::Healthy,
            ProbeState::Error => ServiceState::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceState::Healthy
    }
}
