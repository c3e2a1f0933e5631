// Public entities for the TensiGuide API
// Request payloads are validated here before reaching the domain layer

// Error responses
pub mod common;

// Log recording requests
pub mod logs;

// Profile requests
pub mod profile;

// Query parameters and responses for derived insights
pub mod insights;
