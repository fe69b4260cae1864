//! Process-local DAO implementation.

mod contact_dao_impl;

pub use contact_dao_impl::InMemoryContactDaoImpl;
