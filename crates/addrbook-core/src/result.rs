//! Result type aliases for the address book service.

use crate::AddrBookError;

/// A specialized `Result` type for address book operations.
pub type AddrBookResult<T> = Result<T, AddrBookError>;
