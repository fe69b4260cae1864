//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).
//! This module contains concrete structs that implement those traits.

pub mod contact_repository_impl;

pub use contact_repository_impl::ContactRepositoryImpl;
