//! Link creation and resolution service.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::entities::Link;
use crate::domain::store::{LinkStore, StoreError};
use crate::error::AppError;

/// Default prefix for generated short links.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1";

/// Service for creating short links and resolving hashes.
///
/// Holds the store handle injected at startup and the public base URL used to
/// render short links. Keeps no per-request state.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// A trailing `/` on `base_url` is dropped.
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Hashes `original`, stores the link and returns it.
    ///
    /// Input is expected to be validated already. An existing record with the
    /// same hash is overwritten by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store write fails.
    pub async fn create_link(&self, title: String, original: String) -> Result<Link, AppError> {
        let link = Link::from_original(title, original);
        let hash = link.hash.clone();

        self.store.create(link.clone()).await.map_err(|e| {
            error!(hash = %hash, error = %e, "Failed to store link");
            AppError::from(e)
        })?;

        info!(hash = %hash, "Link created");
        Ok(link)
    }

    /// Looks up the link stored under `hash`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this hash.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, hash: &str) -> Result<Link, AppError> {
        self.store.fetch_by_hash(hash).await.map_err(|e| {
            match &e {
                StoreError::NotFound { .. } => debug!(hash = %hash, "Link not found"),
                _ => error!(hash = %hash, error = %e, "Failed to fetch link"),
            }
            AppError::from(e)
        })
    }

    /// Renders the public short URL for `hash`.
    pub fn short_url(&self, hash: &str) -> String {
        format!("{}/{}", self.base_url, hash)
    }
}
