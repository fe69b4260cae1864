//! # Addrbook Repository
//!
//! Layered contact data access:
//!
//! ```text
//! AddressBook
//!   ↓  Arc<dyn ContactRepository>  (domain interface)
//! ContactRepositoryImpl            (repository impl, assigns identities)
//!   ↓  Arc<dyn ContactDao>         (DAO interface)
//! MySqlContactDaoImpl | InMemoryContactDaoImpl
//!   ↓
//! MySQL | process memory
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                       ← ContactRepository trait
//!   impl/
//!     contact_repository_impl.rs    ← ContactRepositoryImpl
//!   dao/
//!     contact_dao.rs                ← ContactDao trait
//!     impl/
//!       mysql/contact_dao_impl.rs   ← MySqlContactDaoImpl
//!       memory/contact_dao_impl.rs  ← InMemoryContactDaoImpl
//!   pool.rs                         ← DatabasePool, migrations, health check
//! ```

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{ContactDao, InMemoryContactDaoImpl, MySqlContactDaoImpl};
pub use pool::*;
pub use r#impl::ContactRepositoryImpl;
pub use traits::*;
