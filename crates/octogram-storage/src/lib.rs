// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential persistence for the Octogram bot.
//!
//! Provides WAL-mode SQLite storage with embedded migrations and a
//! single-writer concurrency model via `tokio-rusqlite`, plus an in-memory
//! backend for tests and ephemeral deployments. Both implement the
//! [`CredentialStore`] trait from `octogram-core`, so the rest of the bot
//! never knows which backend it is talking to.

use std::sync::Arc;

use octogram_config::model::StorageConfig;
use octogram_config::StorageBackend;
use octogram_core::{CredentialStore, OctogramError};
use tracing::info;

pub mod database;
pub mod memory;
pub mod migrations;
pub mod queries;
pub mod sqlite;

pub use database::Database;
pub use memory::MemoryCredentialStore;
pub use sqlite::SqliteCredentialStore;

/// Open the credential store selected by `storage.backend`.
pub async fn open_store(
    config: &StorageConfig,
) -> Result<Arc<dyn CredentialStore>, OctogramError> {
    match config.backend {
        StorageBackend::Sqlite => {
            let store = SqliteCredentialStore::open(&config.database_path).await?;
            info!(backend = "sqlite", path = %config.database_path, "credential store ready");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!(backend = "memory", "credential store ready");
            Ok(Arc::new(MemoryCredentialStore::new()))
        }
    }
}
