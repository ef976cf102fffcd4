// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Octogram bot.

use thiserror::Error;

/// The primary error type used across all Octogram crates.
#[derive(Debug, Error)]
pub enum OctogramError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential store errors (database unreachable, query failure).
    #[error("credential store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// OAuth flow errors (missing callback parameters, token exchange failure).
    #[error("oauth error: {0}")]
    OAuth(String),

    /// Non-success responses or transport failures from the GitHub API.
    /// `status` is `None` when the request never produced a response.
    #[error("github api error: {message}")]
    RemoteApi {
        status: Option<u16>,
        message: String,
    },

    /// A conversation invariant was violated (e.g. missing account selection).
    #[error("conversation state error: {0}")]
    State(String),

    /// Chat transport errors (connection failure, send failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An outbound call exceeded its deadline.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OctogramError {
    /// Whether a single bounded retry is worthwhile.
    ///
    /// Only transport-level failures qualify. HTTP error statuses, OAuth
    /// failures, and signature failures are never retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            OctogramError::Timeout { .. } | OctogramError::RemoteApi { status: None, .. }
        )
    }
}

/// Webhook authentication failures, mapped to HTTP 403 at the front door.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The `X-Hub-Signature-256` header was not sent.
    #[error("x-hub-signature-256 header is missing!")]
    MissingSignature,

    /// The signature did not match the request body.
    #[error("Request signatures didn't match!")]
    Mismatch,
}
