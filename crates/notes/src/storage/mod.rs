//! Table backend implementations.
//!
//! This module provides concrete implementations of the `NoteTable` trait
//! defined in `notes_core::storage`. Each backend is compiled in through its
//! own feature flag and selected at runtime by [`connect`].
//!
//! # Feature Flags
//!
//! - `inmemory` (default): `HashMap` table, nothing is persisted
//! - `sqlite`: SQLite table using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB table using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p notes --features dynamodb
//! ```

use std::sync::Arc;

use notes_core::storage::{NoteTable, RepositoryError, Result};

use crate::config::{Config, StorageBackend};

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryTable;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTable;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTable;

/// Opens the table backend selected by `config`.
///
/// Called once at startup; the returned handle is shared by every repository
/// clone. Selecting a backend that was not compiled in is a connection failure.
pub async fn connect(config: &Config) -> Result<Arc<dyn NoteTable>> {
    tracing::info!(backend = %config.storage, "Opening note table");

    match config.storage {
        #[cfg(feature = "inmemory")]
        StorageBackend::InMemory => Ok(Arc::new(InMemoryTable::new())),

        #[cfg(feature = "sqlite")]
        StorageBackend::Sqlite => Ok(Arc::new(SqliteTable::new(&config.sqlite_path).await?)),

        #[cfg(feature = "dynamodb")]
        StorageBackend::DynamoDb => Ok(Arc::new(DynamoDbTable::from_config(config).await?)),

        #[allow(unreachable_patterns)]
        backend => Err(RepositoryError::ConnectionFailed(format!(
            "Storage backend '{backend}' is not enabled in this build"
        ))),
    }
}
