//! # AddrBook Server Library
//!
//! Composition root and startup utilities for the address book server.

pub mod di;
pub mod startup;
