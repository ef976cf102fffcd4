// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Octogram bot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Octogram configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. Defaults are compiled in; the secrets under `[telegram]` and
/// `[github]` have no defaults and are validated as required at startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OctogramConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// GitHub OAuth app and API settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Credential store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP front door settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the bot process.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "octogram".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required at startup.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// GitHub OAuth app and API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    /// OAuth app client id. Required at startup.
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth app client secret. Required at startup; never logged.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Shared secret for webhook signature verification. Required at startup.
    #[serde(default)]
    pub webhook_secret: Option<String>,

    /// Externally reachable domain hosting the OAuth callback, without
    /// scheme or path (e.g. `bot.example.com`). Required at startup.
    #[serde(default)]
    pub callback_domain: Option<String>,

    /// Base URL of the GitHub REST API. Overridable for tests.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL of github.com, used for the OAuth authorize and token
    /// endpoints. Overridable for tests.
    #[serde(default = "default_oauth_base")]
    pub oauth_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            webhook_secret: None,
            callback_domain: None,
            api_base: default_api_base(),
            oauth_base: default_oauth_base(),
        }
    }
}

impl GithubConfig {
    /// The fixed `redirect_uri` registered with the OAuth app.
    pub fn callback_url(&self) -> Option<String> {
        self.callback_domain
            .as_deref()
            .map(|domain| format!("https://{domain}/callback"))
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("callback_domain", &self.callback_domain)
            .field("api_base", &self.api_base)
            .field("oauth_base", &self.oauth_base)
            .finish()
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_oauth_base() -> String {
    "https://github.com".to_string()
}

/// Which credential store backend to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// WAL-mode SQLite file (the default).
    #[default]
    Sqlite,
    /// Process-local map; credentials are lost on restart.
    Memory,
}

/// Credential store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Backend selection; callers of the store never see which is active.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to the SQLite database file (ignored by the memory backend).
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("octogram").join("octogram.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("octogram.db"))
        .to_string_lossy()
        .into_owned()
}

/// HTTP front door configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address to bind the listener to.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "0.0.0.0".to_string()
}

fn default_gateway_port() -> u16 {
    8080
}
