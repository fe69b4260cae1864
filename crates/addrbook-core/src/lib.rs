//! # Addrbook Core
//!
//! Core types, traits, and error definitions for the address book service.
//! Every other crate in the workspace depends on the error taxonomy and the
//! contact model defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
