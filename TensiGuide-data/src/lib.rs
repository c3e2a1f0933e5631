// TensiGuide Data
// This crate handles storage of patient logs and profiles

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
