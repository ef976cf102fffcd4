// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub API client trait.
//!
//! The conversation engine only sees this seam; the reqwest implementation
//! lives in `octogram-github`, and tests substitute canned responses.

use async_trait::async_trait;

use crate::error::OctogramError;
use crate::types::{Account, CreatedIssue, NewIssue};

/// The slice of the GitHub REST API that Octogram drives.
///
/// Every method takes an optional bearer token; `None` means anonymous
/// access, which GitHub answers with an empty or 401 view.
#[async_trait]
pub trait GithubApi: Send + Sync + 'static {
    /// Fetches the authenticated user plus their organizations.
    ///
    /// Partial failures degrade to a shorter list rather than an error;
    /// an empty list means the credential is missing or unusable.
    async fn list_accounts(&self, token: Option<&str>) -> Result<Vec<Account>, OctogramError>;

    /// Lists repository names owned by the given account.
    async fn list_repos(
        &self,
        token: Option<&str>,
        account: &Account,
    ) -> Result<Vec<String>, OctogramError>;

    /// Creates an issue and returns its canonical URL. Any status other
    /// than 201 is an `OctogramError::RemoteApi` carrying the status but
    /// never the remote response body.
    async fn create_issue(
        &self,
        token: Option<&str>,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, OctogramError>;
}
