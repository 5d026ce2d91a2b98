#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use linkhash::domain::entities::Link;
use linkhash::domain::store::{LinkStore, StoreError};
use linkhash::infrastructure::persistence::InMemoryLinkStore;
use linkhash::routes::app_router;
use linkhash::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://127.0.0.1";

/// A store whose every call fails with a backend error.
pub struct FailingLinkStore;

#[async_trait]
impl LinkStore for FailingLinkStore {
    async fn create(&self, _link: Link) -> Result<(), StoreError> {
        Err(StoreError::Backend("unknown error".to_string()))
    }

    async fn fetch_by_hash(&self, _hash: &str) -> Result<Link, StoreError> {
        Err(StoreError::Backend("unknown error".to_string()))
    }

    async fn provision_schema(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("unknown error".to_string()))
    }
}

pub fn create_test_server(store: Arc<dyn LinkStore>) -> TestServer {
    let state = AppState::new(store, BASE_URL);
    TestServer::new(app_router(state)).unwrap()
}

/// Server over an empty in-memory store; the store handle is returned for
/// seeding and inspection.
pub fn create_memory_server() -> (TestServer, Arc<InMemoryLinkStore>) {
    let store = Arc::new(InMemoryLinkStore::new());
    let server = create_test_server(store.clone());
    (server, store)
}

pub fn create_failing_server() -> TestServer {
    create_test_server(Arc::new(FailingLinkStore))
}

pub async fn seed_link(store: &InMemoryLinkStore, hash: &str, original: &str) {
    store
        .create(Link::new(
            hash.to_string(),
            "Seeded".to_string(),
            original.to_string(),
        ))
        .await
        .unwrap();
}
