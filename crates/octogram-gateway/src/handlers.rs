// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request handlers for the gateway routes.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use serde::Deserialize;
use tracing::{error, info, warn};

use octogram_core::ChatUserId;

use crate::pages;
use crate::server::GatewayState;
use crate::signature::verify_signature;

/// Query parameters GitHub appends to the OAuth callback redirect.
///
/// `state` echoes whatever was put in the authorize URL, which for
/// Octogram is the chat user id.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /callback: complete the OAuth handshake.
///
/// Exchanges the code for an access token and stores it under the chat
/// user id carried in `state`. The token itself never appears in the
/// response or the logs.
pub async fn get_callback(
    State(state): State<GatewayState>,
    Query(params): Query<CallbackParams>,
) -> (StatusCode, Html<String>) {
    let (Some(code), Some(chat_id)) = (params.code, params.state) else {
        return (
            StatusCode::BAD_REQUEST,
            Html("Missing code or state".to_string()),
        );
    };

    let token = match state.oauth.exchange_code(&code).await {
        Ok(Some(token)) => token,
        Ok(None) => {
            warn!("token exchange yielded no token; code invalid or expired");
            return (
                StatusCode::BAD_REQUEST,
                Html("Failed to get access token".to_string()),
            );
        }
        Err(err) => {
            error!(error = %err, "token exchange failed");
            return (
                StatusCode::BAD_REQUEST,
                Html("Failed to get access token".to_string()),
            );
        }
    };

    let identity = ChatUserId::from(chat_id.as_str());
    if let Err(err) = state.store.put(&identity, &token).await {
        error!(user = %identity, error = %err, "failed to persist access token");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("Failed to save login. Please try again.".to_string()),
        );
    }

    info!(user = %identity, "github login completed");
    (StatusCode::OK, Html(pages::LOGIN_SUCCESS.to_string()))
}

/// POST /webhook: receive a GitHub webhook delivery.
///
/// The signature is checked over the raw body before the JSON is touched.
/// Both auth failures answer 403; their bodies differ so a misconfigured
/// sender can tell "forgot the header" from "wrong secret".
pub async fn post_webhook(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = headers
        .get("x-hub-signature-256")
        .and_then(|v| v.to_str().ok());

    if let Err(err) = verify_signature(&body, &state.webhook_secret, header) {
        warn!(error = %err, "webhook delivery rejected");
        return (StatusCode::FORBIDDEN, err.to_string());
    }

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                "Invalid JSON payload".to_string(),
            );
        }
    };

    let action = payload
        .get("action")
        .and_then(|a| a.as_str())
        .unwrap_or("<none>");
    info!(action, "webhook received");
    (StatusCode::OK, "Webhook received".to_string())
}

/// GET /support: static support page.
pub async fn get_support() -> Html<&'static str> {
    Html(pages::SUPPORT)
}

/// GET /privacy-policy: static privacy policy page.
pub async fn get_privacy_policy() -> Html<&'static str> {
    Html(pages::PRIVACY_POLICY)
}
