// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes and shared state for the front door: the OAuth
//! callback, the GitHub webhook receiver, and the static pages Telegram
//! requires a public bot to host.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use octogram_config::model::GatewayConfig;
use octogram_core::{CredentialStore, OctogramError};
use octogram_github::OauthFlow;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Where completed logins deposit their tokens.
    pub store: Arc<dyn CredentialStore>,
    /// OAuth flow used to exchange callback codes.
    pub oauth: Arc<OauthFlow>,
    /// Shared secret for webhook signature verification.
    pub webhook_secret: String,
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("oauth", &self.oauth)
            .field("webhook_secret", &"[redacted]")
            .finish_non_exhaustive()
    }
}

/// Build the gateway router.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/callback", get(handlers::get_callback))
        .route("/webhook", post(handlers::post_webhook))
        .route("/support", get(handlers::get_support))
        .route("/privacy-policy", get(handlers::get_privacy_policy))
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until the process exits.
pub async fn start_server(
    config: &GatewayConfig,
    state: GatewayState,
) -> Result<(), OctogramError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| OctogramError::Channel {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| OctogramError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use octogram_config::model::GithubConfig;
    use octogram_storage::MemoryCredentialStore;

    fn state() -> GatewayState {
        let github = GithubConfig {
            client_id: Some("iv1.abc".into()),
            client_secret: Some("s3cret".into()),
            webhook_secret: Some("hush".into()),
            callback_domain: Some("bot.example.com".into()),
            ..GithubConfig::default()
        };
        GatewayState {
            store: Arc::new(MemoryCredentialStore::new()),
            oauth: Arc::new(OauthFlow::new(&github).unwrap()),
            webhook_secret: "hush".to_string(),
        }
    }

    #[test]
    fn router_builds_with_all_routes() {
        let _router = router(state());
    }

    #[test]
    fn gateway_state_debug_redacts_the_webhook_secret() {
        let debug = format!("{:?}", state());
        assert!(!debug.contains("hush"));
        assert!(!debug.contains("s3cret"));
    }

    #[tokio::test]
    async fn start_server_reports_bind_failures() {
        let config = GatewayConfig {
            host: "256.256.256.256".to_string(),
            port: 0,
        };
        let err = start_server(&config, state()).await.unwrap_err();
        assert!(matches!(err, OctogramError::Channel { .. }));
    }
}
