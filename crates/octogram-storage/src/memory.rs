// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the CredentialStore trait.
//!
//! Tokens live only as long as the process. Useful for tests and for
//! running the bot without a writable filesystem.

use async_trait::async_trait;
use dashmap::DashMap;

use octogram_core::{ChatUserId, CredentialStore, OctogramError};

/// Process-local credential store backed by a concurrent map.
#[derive(Default)]
pub struct MemoryCredentialStore {
    tokens: DashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn put(&self, id: &ChatUserId, access_token: &str) -> Result<(), OctogramError> {
        self.tokens
            .insert(id.to_string(), access_token.to_string());
        Ok(())
    }

    async fn get(&self, id: &ChatUserId) -> Result<Option<String>, OctogramError> {
        Ok(self.tokens.get(id.as_str()).map(|v| v.clone()))
    }
}
