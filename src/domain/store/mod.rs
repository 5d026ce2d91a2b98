//! Link store contract.
//!
//! The trait is implemented by concrete stores in
//! `crate::infrastructure::persistence`. A mock is generated via `mockall`
//! for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError};

#[cfg(test)]
pub use link_store::MockLinkStore;
