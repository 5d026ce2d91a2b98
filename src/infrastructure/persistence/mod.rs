//! Link store implementations.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - PostgreSQL table `links`, used in production
//! - [`InMemoryLinkStore`] - process-local map for development and tests

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::InMemoryLinkStore;
pub use pg_link_store::PgLinkStore;
