//! Shared types, errors, and configuration for Rentora.
//!
//! This crate provides common types used across all other crates:
//! - Tenant identifier for multi-tenant scoping
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::TenantId;
