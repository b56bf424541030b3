//! Health reporting for the `/health` endpoint

use serde::{Deserialize, Serialize};

/// Share of healthy components at or above which the service reports healthy
const HEALTHY_THRESHOLD: f64 = 0.8;

/// Overall health status of the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,
    /// Healthy components over total components
    pub score: f64,
    pub components: Vec<ComponentHealth>,
    /// Unix timestamp of the check
    pub timestamp: i64,
}

impl HealthStatus {
    /// Healthy, scored 1.0, no components yet
    pub fn new() -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            components: Vec::new(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    /// Recompute `score` and `is_healthy` from the components.
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy = self.components.iter().filter(|c| c.is_healthy).count();
        #[allow(clippy::cast_precision_loss)]
        let score = healthy as f64 / self.components.len() as f64;
        self.score = score;
        self.is_healthy = score >= HEALTHY_THRESHOLD;
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health of one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_stays_healthy() {
        let mut status = HealthStatus::new();

        status.calculate_score();

        assert!(status.is_healthy);
        assert!((status.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_failing_component_of_two_is_unhealthy() {
        let mut status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("scheduler"))
            .add_component(ComponentHealth::unhealthy("database", "disk I/O error"));

        status.calculate_score();

        assert!((status.score - 0.5).abs() < f64::EPSILON);
        assert!(!status.is_healthy);
        assert_eq!(status.components[1].message.as_deref(), Some("disk I/O error"));
    }
}
