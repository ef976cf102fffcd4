// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub OAuth web application flow.
//!
//! Builds authorize URLs carrying the chat user id as the `state`
//! parameter, and exchanges callback codes for access tokens. The client
//! secret is held in a [`SecretString`] and only leaves the process inside
//! the token exchange request.

use std::time::Duration;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use octogram_config::model::GithubConfig;
use octogram_core::{ChatUserId, OctogramError};

use crate::client::map_transport_err;

/// The OAuth scope requested from GitHub. Issue creation needs full
/// repository access.
const OAUTH_SCOPE: &str = "repo";

/// GitHub OAuth client for the authorize/exchange handshake.
pub struct OauthFlow {
    http: reqwest::Client,
    client_id: String,
    client_secret: SecretString,
    callback_url: String,
    authorize_endpoint: Url,
    token_endpoint: String,
}

impl OauthFlow {
    /// Builds the flow from validated configuration.
    ///
    /// Fails if any of the required OAuth settings are absent; config
    /// validation normally catches that before this runs.
    pub fn new(config: &GithubConfig) -> Result<Self, OctogramError> {
        let client_id = config
            .client_id
            .clone()
            .ok_or_else(|| OctogramError::Config("github.client_id is required".into()))?;
        let client_secret = config
            .client_secret
            .clone()
            .ok_or_else(|| OctogramError::Config("github.client_secret is required".into()))?;
        let callback_url = config
            .callback_url()
            .ok_or_else(|| OctogramError::Config("github.callback_domain is required".into()))?;

        let oauth_base = config.oauth_base.trim_end_matches('/');
        let authorize_endpoint = Url::parse(&format!("{oauth_base}/login/oauth/authorize"))
            .map_err(|e| OctogramError::Config(format!("invalid github.oauth_base: {e}")))?;

        let http = reqwest::Client::builder()
            .user_agent("octogram")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                OctogramError::Internal(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            client_id,
            client_secret: SecretString::from(client_secret),
            callback_url,
            authorize_endpoint,
            token_endpoint: format!("{oauth_base}/login/oauth/access_token"),
        })
    }

    /// The URL a user opens to grant access.
    ///
    /// `state` carries the chat user id so the callback can associate the
    /// granted token with the conversation that asked for it.
    pub fn authorize_url(&self, identity: &ChatUserId) -> String {
        let mut url = self.authorize_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url)
            .append_pair("scope", OAUTH_SCOPE)
            .append_pair("state", identity.as_str())
            .append_pair("allow_signup", "true");
        url.to_string()
    }

    /// Exchanges a callback `code` for an access token.
    ///
    /// GitHub answers invalid or expired codes with HTTP 200 and an error
    /// payload instead of a token; that surfaces as `Ok(None)`.
    pub async fn exchange_code(&self, code: &str) -> Result<Option<String>, OctogramError> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("code", code),
            ("redirect_uri", self.callback_url.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_endpoint)
            .header("accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(map_transport_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OctogramError::OAuth(format!(
                "token exchange returned {status}"
            )));
        }

        let body: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| OctogramError::OAuth(format!("unreadable token response: {e}")))?;

        debug!(granted = body.access_token.is_some(), "token exchange completed");
        Ok(body.access_token)
    }
}

impl std::fmt::Debug for OauthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OauthFlow")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("callback_url", &self.callback_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(oauth_base: &str) -> GithubConfig {
        GithubConfig {
            client_id: Some("iv1.abc".into()),
            client_secret: Some("s3cret".into()),
            webhook_secret: Some("hush".into()),
            callback_domain: Some("bot.example.com".into()),
            oauth_base: oauth_base.to_string(),
            ..GithubConfig::default()
        }
    }

    #[test]
    fn authorize_url_carries_identity_as_state() {
        let flow = OauthFlow::new(&config("https://github.com")).unwrap();
        let url = flow.authorize_url(&ChatUserId::from(424242u64));

        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=iv1.abc"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fbot.example.com%2Fcallback"));
        assert!(url.contains("scope=repo"));
        assert!(url.contains("state=424242"));
        assert!(url.contains("allow_signup=true"));
        assert!(!url.contains("s3cret"));
    }

    #[test]
    fn missing_client_id_is_a_config_error() {
        let mut c = config("https://github.com");
        c.client_id = None;
        let err = OauthFlow::new(&c).unwrap_err();
        assert!(matches!(err, OctogramError::Config(_)));
    }

    #[test]
    fn debug_never_prints_the_client_secret() {
        let flow = OauthFlow::new(&config("https://github.com")).unwrap();
        let debug = format!("{flow:?}");
        assert!(!debug.contains("s3cret"));
    }

    #[tokio::test]
    async fn exchange_code_returns_token_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(header("accept", "application/json"))
            .and(body_string_contains("code=good-code"))
            .and(body_string_contains("client_secret=s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "gho_granted",
                "token_type": "bearer",
                "scope": "repo"
            })))
            .mount(&server)
            .await;

        let flow = OauthFlow::new(&config(&server.uri())).unwrap();
        let token = flow.exchange_code("good-code").await.unwrap();
        assert_eq!(token.as_deref(), Some("gho_granted"));
    }

    #[tokio::test]
    async fn exchange_code_with_bad_code_yields_none() {
        let server = MockServer::start().await;
        // GitHub reports bad codes with a 200 and an error payload.
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "bad_verification_code",
                "error_description": "The code passed is incorrect or expired."
            })))
            .mount(&server)
            .await;

        let flow = OauthFlow::new(&config(&server.uri())).unwrap();
        let token = flow.exchange_code("stale-code").await.unwrap();
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn exchange_code_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let flow = OauthFlow::new(&config(&server.uri())).unwrap();
        let err = flow.exchange_code("any").await.unwrap_err();
        assert!(matches!(err, OctogramError::OAuth(_)));
    }
}
