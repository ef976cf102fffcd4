// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! The required startup secrets (bot token, OAuth client credentials,
//! webhook secret, callback domain) are checked here so the process fails
//! fast with every missing value listed, instead of failing at first use.

use crate::diagnostic::ConfigError;
use crate::model::{OctogramConfig, StorageBackend};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast on the first one).
pub fn validate_config(config: &OctogramConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let required = [
        (
            "telegram.bot_token",
            config.telegram.bot_token.as_deref(),
        ),
        ("github.client_id", config.github.client_id.as_deref()),
        (
            "github.client_secret",
            config.github.client_secret.as_deref(),
        ),
        (
            "github.webhook_secret",
            config.github.webhook_secret.as_deref(),
        ),
        (
            "github.callback_domain",
            config.github.callback_domain.as_deref(),
        ),
    ];
    for (key, value) in required {
        match value {
            None => errors.push(ConfigError::MissingKey {
                key: key.to_string(),
            }),
            Some(v) if v.trim().is_empty() => errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            }),
            Some(_) => {}
        }
    }

    // The callback domain is a bare host: the scheme and /callback path are
    // added when the redirect_uri is built.
    if let Some(domain) = config.github.callback_domain.as_deref()
        && (domain.contains("://") || domain.contains('/'))
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "github.callback_domain `{domain}` must be a bare hostname without scheme or path"
            ),
        });
    }

    for (key, value) in [
        ("github.api_base", &config.github.api_base),
        ("github.oauth_base", &config.github.oauth_base),
    ] {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!("{key} `{value}` must be an http(s) URL"),
            });
        }
    }

    if config.storage.backend == StorageBackend::Sqlite
        && config.storage.database_path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
