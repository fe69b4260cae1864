//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `address_book.rs`).

pub mod address_book_impl;

pub use address_book_impl::AddressBookImpl;
