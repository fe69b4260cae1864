//! # AddrBook Service
//!
//! Contact use cases and the read-through cache in front of persistence.
//!
//! ```text
//! AddressBookImpl ──> ContactCachePartition ──> PartitionedCache ──> CacheBackend
//!        │
//!        └──────────> ContactRepository
//! ```

pub mod address_book;
pub mod cache;
pub mod r#impl;

pub use address_book::*;
pub use cache::*;
pub use r#impl::AddressBookImpl;
