//! # advert-api
//!
//! REST API and WebSocket service for the advert lifecycle.
//!
//! Adverts are created `Pending`, then confirmed: activation records the
//! uploaded file path and publishes one confirmation message; rejection
//! deletes the pending advert. Only active adverts are meant to be shown to
//! buyers.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── AdvertService (service/)
//!     │     ├── AdvertStore ──── DocumentStore (persistence/)
//!     │     │                      ├── PostgreSQL (JSONB documents)
//!     │     │                      └── in-memory
//!     │     └── ConfirmationNotifier ── MessageSink
//!     │                                   └── EventBus (domain/)
//!     │
//!     └── EventBus → WebSocket subscribers
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod ws;
