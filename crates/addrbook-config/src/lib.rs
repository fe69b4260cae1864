//! # Addrbook Config
//!
//! Configuration management for the address book service.
//! Supports layered configuration from files and environment variables,
//! with validation that fails fast at startup.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
