//! Domain model for the address book.

mod contact;

pub use contact::*;
