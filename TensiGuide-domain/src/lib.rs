// TensiGuide Domain
// This crate contains the health scoring and reporting logic for TensiGuide

// Aggregator configuration
pub mod config;

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Health checks and system status
pub mod health;

// Fixtures shared with the api crate's tests
#[cfg(any(test, feature = "mock"))]
pub mod testing;
