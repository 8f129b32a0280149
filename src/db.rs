//! Database access for the bakery API.
//!
//! There is no pool: every call opens one MySQL connection,
//! runs one statement and closes it again. Failures never reach the HTTP
//! layer as errors. Listings degrade to their fallback payload and contact
//! submissions report the failure in the response body.

use std::str::FromStr;

use sqlx::mysql::{MySql, MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::DbSettings;
use crate::models::{ContactResponse, Listing};

const INSERT_CONTACT: &str = "INSERT INTO contact_messages (payload) VALUES (?)";

/// Why a database round-trip did not produce a result.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("missing database setting {var}")]
    ConfigMissing { var: &'static str },

    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    #[error("database query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),
}

impl StoreError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::ConfigMissing { .. } => "config_missing",
            StoreError::InvalidUrl(_) => "invalid_url",
            StoreError::ConnectionFailed(_) => "connection_failed",
            StoreError::QueryFailed(_) => "query_failed",
        }
    }
}

/// Per-request access to the bakery database.
///
/// Cloned into every request through an axum `Extension`; it only holds
/// the credentials, never a live connection.
#[derive(Debug, Clone)]
pub struct Store {
    settings: DbSettings,
}

/// Type alias for the store as seen by route handlers.
pub type AppDb = Store;

impl Store {
    pub fn new(settings: DbSettings) -> Self {
        Self { settings }
    }

    /// Resolve connect options from the configured credentials.
    ///
    /// JDBC-style urls (`jdbc:mysql://...`) are accepted. `DB_USER` and
    /// `DB_PASS` always override credentials embedded in the url.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, StoreError> {
        let url = self
            .settings
            .url
            .as_deref()
            .ok_or(StoreError::ConfigMissing { var: "DB_URL" })?;
        let user = self
            .settings
            .user
            .as_deref()
            .ok_or(StoreError::ConfigMissing { var: "DB_USER" })?;
        let pass = self
            .settings
            .pass
            .as_deref()
            .ok_or(StoreError::ConfigMissing { var: "DB_PASS" })?;

        let url = url.trim();
        let url = url.strip_prefix("jdbc:").unwrap_or(url);

        let options = MySqlConnectOptions::from_str(url).map_err(StoreError::InvalidUrl)?;
        Ok(options.username(user).password(pass))
    }

    async fn connect(&self) -> Result<MySqlConnection, StoreError> {
        let options = self.connect_options()?;
        MySqlConnection::connect_with(&options)
            .await
            .map_err(StoreError::ConnectionFailed)
    }

    /// Fetch every row of a listing, ordered by id.
    pub async fn fetch<T: Listing>(&self) -> Result<Vec<T>, StoreError> {
        let mut conn = self.connect().await?;

        // On error the connection is dropped, which closes the socket.
        let rows = sqlx::query_as::<MySql, T>(T::QUERY)
            .fetch_all(&mut conn)
            .await
            .map_err(StoreError::QueryFailed)?;

        if let Err(e) = conn.close().await {
            debug!("Closing {} connection failed: {}", T::KIND, e);
        }

        Ok(rows)
    }

    /// Fetch a listing, substituting the fallback payload on any failure.
    pub async fn fetch_or_fallback<T: Listing>(&self) -> Vec<T> {
        match self.fetch::<T>().await {
            Ok(rows) => {
                debug!(kind = T::KIND, rows = rows.len(), "Served live listing");
                rows
            }
            Err(e) => {
                warn!(
                    kind = T::KIND,
                    error_kind = e.kind(),
                    "Serving fallback listing: {}",
                    e
                );
                T::fallback()
            }
        }
    }

    /// Append a raw contact-form payload to `contact_messages`.
    pub async fn insert_contact(&self, payload: &str) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;

        sqlx::query(INSERT_CONTACT)
            .bind(payload)
            .execute(&mut conn)
            .await
            .map_err(StoreError::QueryFailed)?;

        if let Err(e) = conn.close().await {
            debug!("Closing contact connection failed: {}", e);
        }

        Ok(())
    }

    /// Save a contact submission and describe the outcome for the client.
    pub async fn save_contact(&self, payload: &str) -> ContactResponse {
        match self.insert_contact(payload).await {
            Ok(()) => {
                debug!(bytes = payload.len(), "Saved contact message");
                ContactResponse::saved()
            }
            Err(e) => {
                warn!(error_kind = e.kind(), "Failed to save contact message: {}", e);
                ContactResponse::failed(e.to_string())
            }
        }
    }
}
