//! Store trait for hash-keyed link persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Link;

/// Failures reported by a [`LinkStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the requested hash.
    #[error("no link found for hash '{hash}'")]
    NotFound { hash: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failure reported by a store that is not backed by `sqlx`, such as a
    /// test double standing in for an unreachable backend.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Key-value persistence for [`Link`] records, keyed by `hash`.
///
/// Each operation is a single atomic key-value call against the backend.
/// Nothing is retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Persists a link unconditionally.
    ///
    /// An existing record with the same hash is overwritten; no uniqueness
    /// check is performed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] or [`StoreError::Backend`] on any
    /// backend failure.
    async fn create(&self, link: Link) -> Result<(), StoreError>;

    /// Fetches the link stored under `hash` (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record exists for `hash`.
    /// Returns [`StoreError::Database`] or [`StoreError::Backend`] otherwise.
    async fn fetch_by_hash(&self, hash: &str) -> Result<Link, StoreError>;

    /// Ensures the backing table exists with `hash` as its only primary key.
    ///
    /// Meant for deployment and setup, not the request path. Safe to run
    /// more than once.
    async fn provision_schema(&self) -> Result<(), StoreError>;
}
