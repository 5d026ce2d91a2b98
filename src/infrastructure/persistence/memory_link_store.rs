//! In-memory link store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::store::{LinkStore, StoreError};

/// A link store backed by a process-local map.
///
/// Records live only as long as the process. Same overwrite and not-found
/// semantics as [`super::PgLinkStore`].
///
/// # Use Cases
///
/// - Development without a database (`STORE_BACKEND=memory`)
/// - Handler tests
#[derive(Default)]
pub struct InMemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn create(&self, link: Link) -> Result<(), StoreError> {
        self.links.write().await.insert(link.hash.clone(), link);
        Ok(())
    }

    async fn fetch_by_hash(&self, hash: &str) -> Result<Link, StoreError> {
        self.links
            .read()
            .await
            .get(hash)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                hash: hash.to_string(),
            })
    }

    async fn provision_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(hash: &str, title: &str, original: &str) -> Link {
        Link::new(hash.to_string(), title.to_string(), original.to_string())
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let store = InMemoryLinkStore::new();
        let google = link("123", "Google", "https://www.google.com");

        store.create(google.clone()).await.unwrap();

        let fetched = store.fetch_by_hash("123").await.unwrap();
        assert_eq!(fetched, google);
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let store = InMemoryLinkStore::new();

        let err = store.fetch_by_hash("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { hash } if hash == "missing"));
    }

    #[tokio::test]
    async fn test_create_overwrites_same_hash() {
        let store = InMemoryLinkStore::new();

        store
            .create(link("dup", "First", "https://first.example"))
            .await
            .unwrap();
        store
            .create(link("dup", "Second", "https://second.example"))
            .await
            .unwrap();

        let fetched = store.fetch_by_hash("dup").await.unwrap();
        assert_eq!(fetched.title, "Second");
        assert_eq!(fetched.original, "https://second.example");
    }

    #[tokio::test]
    async fn test_provision_schema_is_noop() {
        let store = InMemoryLinkStore::new();

        assert!(store.provision_schema().await.is_ok());
        assert!(store.provision_schema().await.is_ok());
        assert!(matches!(
            store.fetch_by_hash("anything").await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
