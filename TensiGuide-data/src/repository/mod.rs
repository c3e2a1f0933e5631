// Repository module structure
pub mod errors;
mod health_logs;
mod in_memory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use health_logs::{HealthLogRepository, HealthLogRepositoryTrait};
pub use in_memory::InMemoryStorage;
