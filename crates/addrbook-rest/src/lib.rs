//! # AddrBook REST
//!
//! REST API layer using Axum for the address book service.
//! Provides HTTP endpoints for contact management, service metadata and
//! health checks.

pub mod controllers;
pub mod dto;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
