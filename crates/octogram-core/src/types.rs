// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Octogram workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Stable identifier of one Telegram participant: the string form of the
/// numeric user id. Used as the primary key everywhere, including the OAuth
/// `state` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatUserId(pub String);

impl ChatUserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChatUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatUserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ChatUserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Whether a GitHub account is a personal user or an organization.
///
/// The lowercase string form round-trips through callback payloads
/// (`login:kind`) and matches the GitHub API's vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    User,
    Org,
}

/// One GitHub account reachable by a credential. Ephemeral: fetched per
/// conversation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub kind: AccountKind,
}

impl Account {
    /// The `login:kind` payload carried by an account selection button.
    pub fn callback_data(&self) -> String {
        format!("{}:{}", self.login, self.kind)
    }

    /// Parses a `login:kind` callback payload. Returns `None` for anything
    /// malformed; callers treat that as a no-op rather than an error.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        let (login, kind) = data.split_once(':')?;
        if login.is_empty() {
            return None;
        }
        let kind = kind.parse().ok()?;
        Some(Self {
            login: login.to_string(),
            kind,
        })
    }

    /// Human-readable button label, e.g. `alice (user)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.login, self.kind)
    }
}

/// Payload for creating an issue against `repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

/// The fields of a 201 response we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// Canonical browser URL of the created issue, reported back to the user.
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn account_kind_round_trips_through_strings() {
        for kind in [AccountKind::User, AccountKind::Org] {
            let s = kind.to_string();
            assert_eq!(AccountKind::from_str(&s).unwrap(), kind);
        }
        assert_eq!(AccountKind::User.to_string(), "user");
        assert_eq!(AccountKind::Org.to_string(), "org");
    }

    #[test]
    fn callback_data_round_trips() {
        let account = Account {
            login: "alice".into(),
            kind: AccountKind::User,
        };
        assert_eq!(account.callback_data(), "alice:user");
        assert_eq!(
            Account::from_callback_data("alice:user"),
            Some(account)
        );
    }

    #[test]
    fn malformed_callback_data_is_rejected() {
        assert_eq!(Account::from_callback_data("alice"), None);
        assert_eq!(Account::from_callback_data(":user"), None);
        assert_eq!(Account::from_callback_data("alice:robot"), None);
        assert_eq!(Account::from_callback_data(""), None);
    }

    #[test]
    fn account_label_includes_kind() {
        let account = Account {
            login: "acme".into(),
            kind: AccountKind::Org,
        };
        assert_eq!(account.label(), "acme (org)");
    }

    #[test]
    fn created_issue_deserializes_from_github_response() {
        let json = r#"{"id": 1, "number": 1, "html_url": "https://github.com/alice/proj/issues/1"}"#;
        let issue: CreatedIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.html_url, "https://github.com/alice/proj/issues/1");
    }
}
