//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::store::LinkStore`] contract.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory link stores

pub mod persistence;
