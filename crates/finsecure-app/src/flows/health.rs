//! Backend health probe, run only on explicit request

use finsecure_core::prelude::*;
use finsecure_core::HealthStatus;

/// Result of the most recent probe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HealthCheck {
    /// Never probed
    #[default]
    Unknown,
    Healthy { database: String },
    /// Reachable, but reporting a problem
    Degraded { status: String, database: String },
    Unreachable { reason: String },
}

impl From<HealthStatus> for HealthCheck {
    fn from(status: HealthStatus) -> Self {
        if status.is_healthy() {
            HealthCheck::Healthy {
                database: status.database,
            }
        } else {
            HealthCheck::Degraded {
                status: status.status,
                database: status.database,
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthFlow {
    in_flight: bool,
    last: HealthCheck,
}

impl HealthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a probe is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn complete(&mut self, check: HealthCheck) {
        self.in_flight = false;
        self.last = check;
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight
    }

    pub fn last(&self) -> &HealthCheck {
        &self.last
    }
}

pub fn resolve(result: Result<HealthStatus>) -> HealthCheck {
    match result {
        Ok(status) => status.into(),
        Err(e) => {
            warn!("Health probe failed: {}", e);
            HealthCheck::Unreachable { reason: e.reason() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_lifecycle() {
        let mut flow = HealthFlow::new();
        assert_eq!(flow.last(), &HealthCheck::Unknown);
        assert!(flow.begin());
        assert!(!flow.begin());

        flow.complete(HealthCheck::Healthy {
            database: "connected".into(),
        });

        assert!(!flow.is_checking());
        assert!(matches!(flow.last(), HealthCheck::Healthy { .. }));
    }

    #[test]
    fn test_unhealthy_status_is_degraded() {
        let check = resolve(Ok(HealthStatus {
            status: "starting".into(),
            database: "disconnected".into(),
            timestamp: None,
        }));
        assert_eq!(
            check,
            HealthCheck::Degraded {
                status: "starting".into(),
                database: "disconnected".into()
            }
        );
    }

    #[test]
    fn test_transport_failure_is_unreachable() {
        let check = resolve(Err(Error::transport("http://x", "connection refused")));
        assert_eq!(
            check,
            HealthCheck::Unreachable {
                reason: "connection refused".into()
            }
        );
    }
}
