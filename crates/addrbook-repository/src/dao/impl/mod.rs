//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module (e.g. `contact_dao.rs`).
//! Implementations are organized by technology.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryContactDaoImpl;
pub use mysql::MySqlContactDaoImpl;
