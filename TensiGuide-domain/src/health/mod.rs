//! Domain layer health check functionality
//! This module reports whether the log storage can serve requests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::services::PatientHealthServiceTrait;

/// Name of the storage component in health reports
pub const STORAGE_COMPONENT: &str = "storage";

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Derive the overall status from the worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };
        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Health service that checks the patient service's storage
pub struct HealthService {
    patients: Arc<dyn PatientHealthServiceTrait + Send + Sync>,
}

impl HealthService {
    pub fn new(patients: Arc<dyn PatientHealthServiceTrait + Send + Sync>) -> Self {
        Self { patients }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let storage = match self.patients.ping().await {
            Ok(()) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
            Err(e) => {
                warn!(error = %e, "Storage health check failed");
                HealthComponent {
                    status: ComponentStatus::Unhealthy,
                    details: Some(e.to_string()),
                }
            }
        };

        SystemHealth::from_components(
            vec![(STORAGE_COMPONENT.to_string(), storage)].into_iter().collect(),
        )
    }
}
