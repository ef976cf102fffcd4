// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the GitHub REST API.
//!
//! Provides [`GithubClient`], the reqwest-backed implementation of the
//! [`GithubApi`] trait: account discovery, repository listing, and issue
//! creation. Error responses surface only the HTTP status; remote response
//! bodies are never echoed to chat users.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

use octogram_core::{Account, AccountKind, CreatedIssue, GithubApi, NewIssue, OctogramError};

/// Outbound request deadline. Telegram chats feel broken well before a
/// minute, so calls are cut short and reported instead.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for GitHub REST API communication.
///
/// Manages connection pooling and a single bounded retry for transport
/// failures. HTTP error statuses are never retried.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_base: String,
}

impl GithubClient {
    /// Creates a new GitHub API client against the given base URL.
    pub fn new(api_base: &str) -> Result<Self, OctogramError> {
        let client = reqwest::Client::builder()
            .user_agent("octogram")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                OctogramError::Internal(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a request, retrying once after a transport failure.
    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, OctogramError> {
        let retry = req.try_clone();
        match req.send().await {
            Ok(response) => Ok(response),
            Err(e) => {
                let err = map_transport_err(e);
                match (retry, err.is_transient()) {
                    (Some(retry_req), true) => {
                        warn!(error = %err, "retrying GitHub request after transport failure");
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        retry_req.send().await.map_err(map_transport_err)
                    }
                    _ => Err(err),
                }
            }
        }
    }

    fn get(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(format!("{}{path}", self.api_base))
            .header("accept", "application/vnd.github+json");
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn fetch_user(&self, token: Option<&str>) -> Result<Account, OctogramError> {
        let response = self.execute(self.get("/user", token)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("GET /user returned {status}"),
            });
        }
        let user: UserResponse = response.json().await.map_err(|e| OctogramError::RemoteApi {
            status: Some(status.as_u16()),
            message: format!("failed to parse /user response: {e}"),
        })?;
        Ok(Account {
            login: user.login,
            kind: AccountKind::User,
        })
    }

    async fn fetch_orgs(&self, token: Option<&str>) -> Result<Vec<Account>, OctogramError> {
        let response = self.execute(self.get("/user/orgs", token)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("GET /user/orgs returned {status}"),
            });
        }
        let orgs: Vec<OrgResponse> =
            response.json().await.map_err(|e| OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("failed to parse /user/orgs response: {e}"),
            })?;
        Ok(orgs
            .into_iter()
            .map(|org| Account {
                login: org.login,
                kind: AccountKind::Org,
            })
            .collect())
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn list_accounts(&self, token: Option<&str>) -> Result<Vec<Account>, OctogramError> {
        let mut accounts = Vec::new();

        match self.fetch_user(token).await {
            Ok(account) => accounts.push(account),
            Err(err) => error!(error = %err, "failed to fetch authenticated user"),
        }
        match self.fetch_orgs(token).await {
            Ok(orgs) => accounts.extend(orgs),
            Err(err) => error!(error = %err, "failed to fetch organizations"),
        }

        debug!(count = accounts.len(), "accounts listed");
        Ok(accounts)
    }

    async fn list_repos(
        &self,
        token: Option<&str>,
        account: &Account,
    ) -> Result<Vec<String>, OctogramError> {
        let path = match account.kind {
            AccountKind::Org => format!("/orgs/{}/repos", account.login),
            AccountKind::User => format!("/users/{}/repos", account.login),
        };

        let response = self.execute(self.get(&path, token)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("GET {path} returned {status}"),
            });
        }

        let repos: Vec<RepoResponse> =
            response.json().await.map_err(|e| OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("failed to parse repository list: {e}"),
            })?;
        Ok(repos.into_iter().map(|r| r.name).collect())
    }

    async fn create_issue(
        &self,
        token: Option<&str>,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, OctogramError> {
        let mut req = self
            .client
            .post(format!("{}/repos/{owner}/{repo}/issues", self.api_base))
            .header("accept", "application/vnd.github+json")
            .json(issue);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let response = self.execute(req).await?;
        let status = response.status();
        if status.as_u16() != 201 {
            // The remote body may quote repository internals; log nothing
            // beyond the status and keep the body out of the error.
            return Err(OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("creating issue in {owner}/{repo} returned {status}"),
            });
        }

        let created: CreatedIssue =
            response.json().await.map_err(|e| OctogramError::RemoteApi {
                status: Some(status.as_u16()),
                message: format!("failed to parse created issue: {e}"),
            })?;
        debug!(url = %created.html_url, "issue created");
        Ok(created)
    }
}

/// Map a reqwest transport failure into the domain error.
///
/// Timeouts get their own variant; everything else becomes a statusless
/// `RemoteApi`, which marks it as transient for the single retry.
pub(crate) fn map_transport_err(e: reqwest::Error) -> OctogramError {
    if e.is_timeout() {
        OctogramError::Timeout {
            duration: REQUEST_TIMEOUT,
        }
    } else {
        OctogramError::RemoteApi {
            status: None,
            message: format!("request failed: {e}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Debug, Deserialize)]
struct OrgResponse {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::new(&server.uri()).unwrap()
    }

    #[tokio::test]
    async fn list_accounts_combines_user_and_orgs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer gho_tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "alice", "id": 1
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"login": "acme", "id": 2},
                {"login": "widgets-inc", "id": 3}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let accounts = client.list_accounts(Some("gho_tok")).await.unwrap();
        assert_eq!(
            accounts,
            vec![
                Account {
                    login: "alice".into(),
                    kind: AccountKind::User
                },
                Account {
                    login: "acme".into(),
                    kind: AccountKind::Org
                },
                Account {
                    login: "widgets-inc".into(),
                    kind: AccountKind::Org
                },
            ]
        );
    }

    #[tokio::test]
    async fn list_accounts_with_bad_token_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let accounts = client.list_accounts(Some("gho_expired")).await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn list_accounts_keeps_user_when_orgs_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "alice"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let accounts = client.list_accounts(Some("gho_tok")).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].login, "alice");
    }

    #[tokio::test]
    async fn list_repos_uses_org_endpoint_for_orgs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "widgets"},
                {"name": "gadgets"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let account = Account {
            login: "acme".into(),
            kind: AccountKind::Org,
        };
        let repos = client.list_repos(Some("gho_tok"), &account).await.unwrap();
        assert_eq!(repos, vec!["widgets".to_string(), "gadgets".to_string()]);
    }

    #[tokio::test]
    async fn list_repos_uses_user_endpoint_for_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "dotfiles"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let account = Account {
            login: "alice".into(),
            kind: AccountKind::User,
        };
        let repos = client.list_repos(Some("gho_tok"), &account).await.unwrap();
        assert_eq!(repos, vec!["dotfiles".to_string()]);
    }

    #[tokio::test]
    async fn create_issue_returns_html_url_on_201() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/widgets/issues"))
            .and(header("authorization", "Bearer gho_tok"))
            .and(body_json_string(
                r#"{"title":"Crash on save","body":"Steps to reproduce..."}"#,
            ))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "number": 17,
                "html_url": "https://github.com/acme/widgets/issues/17"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let issue = NewIssue {
            title: "Crash on save".into(),
            body: "Steps to reproduce...".into(),
        };
        let created = client
            .create_issue(Some("gho_tok"), "acme", "widgets", &issue)
            .await
            .unwrap();
        assert_eq!(created.html_url, "https://github.com/acme/widgets/issues/17");
    }

    #[tokio::test]
    async fn create_issue_failure_carries_status_but_not_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/widgets/issues"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"message":"Validation Failed: secret-internal-detail"}"#),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let issue = NewIssue {
            title: "t".into(),
            body: "b".into(),
        };
        let err = client
            .create_issue(Some("gho_tok"), "acme", "widgets", &issue)
            .await
            .unwrap_err();
        match err {
            OctogramError::RemoteApi { status, message } => {
                assert_eq!(status, Some(422));
                assert!(!message.contains("secret-internal-detail"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn http_error_statuses_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let account = Account {
            login: "acme".into(),
            kind: AccountKind::Org,
        };
        let err = client
            .list_repos(Some("gho_tok"), &account)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OctogramError::RemoteApi {
                status: Some(500),
                ..
            }
        ));
    }
}
