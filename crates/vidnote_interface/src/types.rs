//! Shared interface types.

/// Health status of a completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// Backend answered normally
    Healthy,
    /// Backend answered, but something looks off
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Backend could not be used
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}

impl HealthStatus {
    /// Whether requests are expected to succeed.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}
