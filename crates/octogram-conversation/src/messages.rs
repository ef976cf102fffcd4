// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing message texts, collected in one place so the wording stays
//! consistent across handlers and tests.

pub const FETCH_ACCOUNTS_FAILED: &str = "Failed to fetch organizations or user info from GitHub. \
     Please check your token or login again with /login command.";

pub const CHOOSE_ACCOUNT: &str = "Choose an organization or your user account:";

pub const NO_REPOS: &str = "No repositories found for this account.";

pub const FETCH_REPOS_FAILED: &str =
    "Failed to fetch repositories for this account. Please try again or /cancel.";

pub const CHOOSE_PROJECT: &str = "Choose a project to create an issue:";

pub const ASK_DESCRIPTION: &str = "Please provide the issue description:";

pub const CREATE_FAILED: &str =
    "Failed to create issue. Please check your GitHub token and repository permissions.";

pub const ACCOUNT_MISSING: &str = "Account selection missing. Please /start again.";

pub const CANCELED: &str = "Operation canceled.";

pub const NO_SESSION: &str = "Nothing in progress. Send /start to begin creating an issue.";

pub const STORE_UNAVAILABLE: &str =
    "Temporary storage problem. Please try again in a moment.";

pub fn selected_project(repo: &str) -> String {
    format!("Selected project: {repo}.\nPlease provide the issue title:")
}

pub fn issue_created(html_url: &str) -> String {
    format!("Issue created successfully! View it here: {html_url}")
}
