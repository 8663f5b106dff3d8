//! advert-api server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use advert_api::api;
use advert_api::app_state::AppState;
use advert_api::config::{AppConfig, LogFormat};
use advert_api::domain::EventBus;
use advert_api::persistence::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore};
use advert_api::service::AdvertService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(addr = %config.listen_addr, "starting advert-api");

    // Build persistence layer
    let documents: Arc<dyn DocumentStore> = if config.persistence_enabled {
        tracing::info!(
            max_connections = config.database_max_connections,
            "using PostgreSQL document store"
        );
        Arc::new(PostgresDocumentStore::connect_lazy(&config)?)
    } else {
        tracing::warn!("persistence disabled, adverts are kept in memory only");
        Arc::new(InMemoryDocumentStore::new())
    };

    // Build notification and service layers
    let event_bus = EventBus::new(config.event_bus_capacity);
    let advert_service = Arc::new(AdvertService::with_collaborators(
        documents,
        Arc::new(event_bus.clone()),
        config.validation.clone(),
        config.confirmed_topic.clone(),
    ));

    // Build application state
    let app_state = AppState {
        advert_service,
        event_bus,
    };

    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
