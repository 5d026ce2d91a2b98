//! Domain layer containing the link entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`store`] - Persistence trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on HTTP or on a concrete database.
//! Request handling lives in [`crate::api`], orchestration in
//! [`crate::application::services`].

pub mod entities;
pub mod store;
