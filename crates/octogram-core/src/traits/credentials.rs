// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential store trait for persistence backends (SQLite, in-memory).

use async_trait::async_trait;

use crate::error::OctogramError;
use crate::types::ChatUserId;

/// Persists the mapping from Telegram identity to GitHub access token.
///
/// `put` is an upsert with last-write-wins semantics: there is at most one
/// credential per identity, and a re-login overwrites the previous token.
/// Implementations must be safe under concurrent access from independent
/// identities; callers never learn which backend is active.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Stores (or overwrites) the credential for one identity.
    async fn put(&self, id: &ChatUserId, access_token: &str) -> Result<(), OctogramError>;

    /// Returns the stored credential, or `None` if the user never logged in.
    async fn get(&self, id: &ChatUserId) -> Result<Option<String>, OctogramError>;
}
