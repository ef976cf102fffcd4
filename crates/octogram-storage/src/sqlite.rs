// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the CredentialStore trait.

use async_trait::async_trait;
use tracing::debug;

use octogram_core::{ChatUserId, CredentialStore, OctogramError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed credential store.
///
/// Wraps a [`Database`] handle and delegates to the typed query module.
/// Tokens survive process restarts, so a user who logged in before a
/// redeploy does not have to run /login again.
pub struct SqliteCredentialStore {
    db: Database,
}

impl SqliteCredentialStore {
    /// Open the store at the given database path, running migrations.
    pub async fn open(database_path: &str) -> Result<Self, OctogramError> {
        let db = Database::open(database_path).await?;
        debug!(path = %database_path, "SQLite credential store opened");
        Ok(Self { db })
    }

    /// Checkpoint and release the underlying database.
    pub async fn close(&self) -> Result<(), OctogramError> {
        self.db.close().await
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn put(&self, id: &ChatUserId, access_token: &str) -> Result<(), OctogramError> {
        queries::tokens::put_token(&self.db, id, access_token).await
    }

    async fn get(&self, id: &ChatUserId) -> Result<Option<String>, OctogramError> {
        queries::tokens::get_token(&self.db, id).await
    }
}
