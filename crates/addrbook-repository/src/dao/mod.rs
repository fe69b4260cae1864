//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO implementation maps to one data source (MySQL, process memory).
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod contact_dao;
pub mod r#impl;

pub use contact_dao::ContactDao;
pub use r#impl::{InMemoryContactDaoImpl, MySqlContactDaoImpl};
