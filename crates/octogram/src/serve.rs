// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `octogram serve` command implementation.
//!
//! Wires the credential store, GitHub clients, conversation engine,
//! HTTP gateway, and Telegram dispatcher together, then runs the gateway
//! and the dispatcher concurrently until a shutdown signal arrives.

use std::sync::Arc;

use tracing::{error, info, warn};

use octogram_config::model::OctogramConfig;
use octogram_conversation::ConversationEngine;
use octogram_core::OctogramError;
use octogram_gateway::GatewayState;
use octogram_github::{GithubClient, OauthFlow};
use octogram_telegram::TelegramBot;

/// Runs the `octogram serve` command.
///
/// Both long-running tasks live in one process: the axum gateway for
/// OAuth callbacks and webhooks, and the teloxide dispatcher for chat.
/// Either one exiting, or Ctrl-C, stops the process.
pub async fn run_serve(config: OctogramConfig) -> Result<(), OctogramError> {
    init_tracing(&config.agent.log_level);

    info!(agent = %config.agent.name, "starting octogram serve");

    let store = octogram_storage::open_store(&config.storage).await?;
    let github = Arc::new(GithubClient::new(&config.github.api_base)?);
    let oauth = Arc::new(OauthFlow::new(&config.github)?);
    let engine = Arc::new(ConversationEngine::new(store.clone(), github));

    let webhook_secret = config
        .github
        .webhook_secret
        .clone()
        .ok_or_else(|| OctogramError::Config("github.webhook_secret is required".into()))?;

    let gateway_state = GatewayState {
        store,
        oauth: oauth.clone(),
        webhook_secret,
    };
    let gateway_config = config.gateway.clone();
    let gateway =
        tokio::spawn(
            async move { octogram_gateway::start_server(&gateway_config, gateway_state).await },
        );

    let bot = TelegramBot::new(&config.telegram, engine, oauth)?;
    let telegram = tokio::spawn(bot.run());

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
        result = gateway => {
            match result {
                Ok(Err(err)) => error!(error = %err, "gateway exited with error"),
                Ok(Ok(())) => warn!("gateway exited"),
                Err(err) => error!(error = %err, "gateway task panicked"),
            }
        }
        result = telegram => {
            match result {
                Ok(()) => warn!("telegram dispatcher exited"),
                Err(err) => error!(error = %err, "telegram dispatcher panicked"),
            }
        }
    }

    info!("octogram stopped");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// octogram crates and `warn` to everything else.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("octogram={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
