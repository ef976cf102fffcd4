// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user conversation state.
//!
//! A conversation exists only between /start and its terminal event
//! (issue created, failed, or /cancel). There is no Idle stage; absence
//! from the session map is the idle state.

use octogram_core::Account;

/// Which prompt the user is currently answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for an account button press.
    SelectAccount,
    /// Waiting for a repository button press.
    SelectProject,
    /// Waiting for the issue title as free text.
    GetTitle,
    /// Waiting for the issue description as free text.
    GetDescription,
}

/// Everything collected so far in one user's issue-filing conversation.
///
/// Fields fill in as the stages advance; a field belonging to an earlier
/// stage being `None` means the state was corrupted and the conversation
/// is aborted rather than guessed at.
#[derive(Debug, Clone)]
pub struct ConversationState {
    pub stage: Stage,
    pub selected_account: Option<Account>,
    pub selected_repo: Option<String>,
    pub title: Option<String>,
}

impl ConversationState {
    /// Fresh state at the account-selection stage.
    pub fn new() -> Self {
        Self {
            stage: Stage::SelectAccount,
            selected_account: None,
            selected_repo: None,
            title: None,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
