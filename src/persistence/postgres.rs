//! PostgreSQL implementation of the document store.
//!
//! Each advert is one row of the `adverts` table:
//!
//! ```sql
//! CREATE TABLE adverts (
//!     id       TEXT PRIMARY KEY,
//!     document JSONB NOT NULL
//! );
//! ```
//!
//! The table is provisioned outside this service.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::DocumentStore;
use super::models::AdvertDocument;
use crate::config::AppConfig;
use crate::domain::{AdvertId, AdvertRecord};
use crate::error::AdvertError;

/// PostgreSQL-backed [`DocumentStore`] using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a lazily connecting pool from the configured database settings.
    ///
    /// No connection is opened until the first query, so an unreachable
    /// database surfaces as [`AdvertError::Transient`] on first use rather
    /// than at startup.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Transient`] if `DATABASE_URL` cannot be parsed.
    pub fn connect_lazy(config: &AppConfig) -> Result<Self, AdvertError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_lazy(&config.database_url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn load(&self, id: &AdvertId) -> Result<Option<AdvertRecord>, AdvertError> {
        let row = sqlx::query_as::<_, (String, serde_json::Value)>(
            "SELECT id, document FROM adverts WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, document)| AdvertDocument { id, document }.into_record())
            .transpose()
    }

    async fn save(&self, record: &AdvertRecord) -> Result<(), AdvertError> {
        let row = AdvertDocument::from_record(record)?;
        sqlx::query(
            "INSERT INTO adverts (id, document) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document",
        )
        .bind(row.id)
        .bind(row.document)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, record: &AdvertRecord) -> Result<(), AdvertError> {
        sqlx::query("DELETE FROM adverts WHERE id = $1")
            .bind(record.id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<AdvertRecord>, AdvertError> {
        let rows = sqlx::query_as::<_, (String, serde_json::Value)>(
            "SELECT id, document FROM adverts",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, document)| AdvertDocument { id, document }.into_record())
            .collect()
    }

    async fn check_health(&self) -> Result<bool, AdvertError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT to_regclass('public.adverts') IS NOT NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "error while checking the adverts table");
            AdvertError::from(e)
        })?;
        Ok(exists)
    }
}
