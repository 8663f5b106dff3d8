//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::AdvertService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Advert service for all business logic.
    pub advert_service: Arc<AdvertService>,
    /// Event bus feeding WebSocket notification subscribers.
    pub event_bus: EventBus,
}
