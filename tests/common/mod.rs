//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;

use advert_api::api;
use advert_api::app_state::AppState;
use advert_api::domain::{AdvertId, AdvertRecord, EventBus, ValidationPolicy};
use advert_api::error::AdvertError;
use advert_api::persistence::{DocumentStore, InMemoryDocumentStore};
use advert_api::service::AdvertService;

/// Topic used for confirmation messages in every fixture.
pub const TOPIC: &str = "advert-confirmed";

/// Document store whose every call fails as if the database were down.
#[derive(Debug, Default)]
pub struct OfflineStore;

#[async_trait]
impl DocumentStore for OfflineStore {
    async fn load(&self, _id: &AdvertId) -> Result<Option<AdvertRecord>, AdvertError> {
        Err(AdvertError::transient("store offline"))
    }

    async fn save(&self, _record: &AdvertRecord) -> Result<(), AdvertError> {
        Err(AdvertError::transient("store offline"))
    }

    async fn delete(&self, _record: &AdvertRecord) -> Result<(), AdvertError> {
        Err(AdvertError::transient("store offline"))
    }

    async fn scan_all(&self) -> Result<Vec<AdvertRecord>, AdvertError> {
        Err(AdvertError::transient("store offline"))
    }

    async fn check_health(&self) -> Result<bool, AdvertError> {
        Err(AdvertError::transient("store offline"))
    }
}

/// Builds application state over `documents`, publishing to a fresh bus.
pub fn make_state(documents: Arc<dyn DocumentStore>) -> AppState {
    let event_bus = EventBus::new(64);
    let advert_service = Arc::new(AdvertService::with_collaborators(
        documents,
        Arc::new(event_bus.clone()),
        ValidationPolicy::default(),
        TOPIC,
    ));
    AppState {
        advert_service,
        event_bus,
    }
}

/// A server running on an ephemeral local port.
#[derive(Debug)]
pub struct TestServer {
    /// Bound address.
    pub addr: SocketAddr,
    /// State shared with the running server.
    pub state: AppState,
}

impl TestServer {
    /// `http://` URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// `ws://` URL of the notification feed.
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

/// Spawns the full application over an in-memory store.
pub async fn spawn_app() -> TestServer {
    spawn_app_with(Arc::new(InMemoryDocumentStore::new())).await
}

/// Spawns the full application over the given document store.
pub async fn spawn_app_with(documents: Arc<dyn DocumentStore>) -> TestServer {
    let state = make_state(documents);
    let app = api::build_app(state.clone());

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    TestServer { addr, state }
}
