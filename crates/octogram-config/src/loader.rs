// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./octogram.toml` > `~/.config/octogram/octogram.toml`
//! > `/etc/octogram/octogram.toml` with environment variable overrides via the
//! `OCTOGRAM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::OctogramConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/octogram/octogram.toml` (system-wide)
/// 3. `~/.config/octogram/octogram.toml` (user XDG config)
/// 4. `./octogram.toml` (local directory)
/// 5. `OCTOGRAM_*` environment variables
pub fn load_config() -> Result<OctogramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OctogramConfig::default()))
        .merge(Toml::file("/etc/octogram/octogram.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("octogram/octogram.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("octogram.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<OctogramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OctogramConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OctogramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OctogramConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `OCTOGRAM_TELEGRAM_BOT_TOKEN` must map
/// to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("OCTOGRAM_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: OCTOGRAM_GITHUB_CLIENT_SECRET -> "github_client_secret"
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("github_", "github.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}
