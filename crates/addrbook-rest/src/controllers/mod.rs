//! REST API controllers.

pub mod contact_controller;
pub mod health_controller;
pub mod version_controller;

pub use health_controller::*;
