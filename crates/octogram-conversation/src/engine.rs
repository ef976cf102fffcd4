// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The issue-filing conversation engine.
//!
//! Consumes [`ChatEvent`]s for a user, advances that user's
//! [`ConversationState`], and emits [`Reply`]s. Events for the same user
//! are serialized through a per-user async mutex, so two rapid messages
//! cannot interleave their read-modify-write of the session. Different
//! users never block each other.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use octogram_core::{Account, ChatUserId, CredentialStore, GithubApi, NewIssue};

use crate::event::{ChatEvent, Command, Reply};
use crate::messages;
use crate::state::{ConversationState, Stage};

/// Drives every user's issue-filing conversation.
pub struct ConversationEngine {
    store: Arc<dyn CredentialStore>,
    github: Arc<dyn GithubApi>,
    sessions: DashMap<ChatUserId, ConversationState>,
    locks: DashMap<ChatUserId, Arc<Mutex<()>>>,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn CredentialStore>, github: Arc<dyn GithubApi>) -> Self {
        Self {
            store,
            github,
            sessions: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    /// Handle one inbound event, returning the replies to send.
    pub async fn handle_event(&self, user: &ChatUserId, event: ChatEvent) -> Vec<Reply> {
        let lock = self.user_lock(user);
        let _guard = lock.lock().await;

        let replies = match event {
            ChatEvent::Command(Command::Start) => self.start(user).await,
            ChatEvent::Command(Command::Cancel) => self.cancel(user),
            ChatEvent::Selection(data) => self.selection(user, &data).await,
            ChatEvent::Text(text) => self.text(user, text).await,
        };

        // Without a live session there is nothing left to serialize; drop
        // the lock entry so the map does not accumulate one per user ever
        // seen. A strong count above two means another task already cloned
        // the Arc and is waiting, so the entry stays.
        if !self.sessions.contains_key(user) {
            self.locks
                .remove_if(user, |_, entry| Arc::strong_count(entry) <= 2);
        }

        replies
    }

    /// The serialization point for one user's events.
    ///
    /// The DashMap guard must not be held across an await, so the Arc is
    /// cloned out before locking.
    fn user_lock(&self, user: &ChatUserId) -> Arc<Mutex<()>> {
        self.locks.entry(user.clone()).or_default().clone()
    }

    fn session(&self, user: &ChatUserId) -> Option<ConversationState> {
        self.sessions.get(user).map(|s| s.clone())
    }

    async fn start(&self, user: &ChatUserId) -> Vec<Reply> {
        let token = match self.store.get(user).await {
            Ok(token) => token,
            Err(err) => {
                error!(%user, error = %err, "credential lookup failed");
                return vec![Reply::Text(messages::STORE_UNAVAILABLE.into())];
            }
        };

        let accounts = match self.github.list_accounts(token.as_deref()).await {
            Ok(accounts) => accounts,
            Err(err) => {
                error!(%user, error = %err, "account listing failed");
                Vec::new()
            }
        };

        if accounts.is_empty() {
            // Covers both "no token stored" and "token rejected".
            self.sessions.remove(user);
            return vec![Reply::Text(messages::FETCH_ACCOUNTS_FAILED.into())];
        }

        self.sessions.insert(user.clone(), ConversationState::new());
        vec![Reply::Choices {
            prompt: messages::CHOOSE_ACCOUNT.into(),
            options: accounts
                .iter()
                .map(|a| (a.label(), a.callback_data()))
                .collect(),
        }]
    }

    /// /cancel destroys the session unconditionally; everything collected
    /// so far is discarded.
    fn cancel(&self, user: &ChatUserId) -> Vec<Reply> {
        self.sessions.remove(user);
        vec![Reply::Text(messages::CANCELED.into())]
    }

    async fn selection(&self, user: &ChatUserId, data: &str) -> Vec<Reply> {
        let Some(state) = self.session(user) else {
            return vec![Reply::Text(messages::NO_SESSION.into())];
        };

        match state.stage {
            Stage::SelectAccount => self.account_selected(user, data).await,
            Stage::SelectProject => self.project_selected(user, state, data),
            // A press on a keyboard left over from an earlier stage.
            Stage::GetTitle | Stage::GetDescription => {
                debug!(%user, "ignoring stale selection");
                vec![]
            }
        }
    }

    async fn account_selected(&self, user: &ChatUserId, data: &str) -> Vec<Reply> {
        let Some(account) = Account::from_callback_data(data) else {
            debug!(%user, "ignoring malformed account selection");
            return vec![];
        };

        let token = match self.store.get(user).await {
            Ok(token) => token,
            Err(err) => {
                error!(%user, error = %err, "credential lookup failed");
                return vec![Reply::Text(messages::STORE_UNAVAILABLE.into())];
            }
        };

        let repos = match self.github.list_repos(token.as_deref(), &account).await {
            Ok(repos) => repos,
            Err(err) => {
                error!(%user, account = %account.login, error = %err, "repository listing failed");
                return vec![Reply::Text(messages::FETCH_REPOS_FAILED.into())];
            }
        };

        if repos.is_empty() {
            self.sessions.remove(user);
            return vec![Reply::Text(messages::NO_REPOS.into())];
        }

        self.sessions.insert(
            user.clone(),
            ConversationState {
                stage: Stage::SelectProject,
                selected_account: Some(account),
                selected_repo: None,
                title: None,
            },
        );
        vec![Reply::Choices {
            prompt: messages::CHOOSE_PROJECT.into(),
            options: repos.into_iter().map(|r| (r.clone(), r)).collect(),
        }]
    }

    fn project_selected(
        &self,
        user: &ChatUserId,
        mut state: ConversationState,
        repo: &str,
    ) -> Vec<Reply> {
        state.selected_repo = Some(repo.to_string());
        state.stage = Stage::GetTitle;
        self.sessions.insert(user.clone(), state);
        vec![Reply::Text(messages::selected_project(repo))]
    }

    async fn text(&self, user: &ChatUserId, text: String) -> Vec<Reply> {
        let Some(mut state) = self.session(user) else {
            return vec![Reply::Text(messages::NO_SESSION.into())];
        };

        match state.stage {
            Stage::GetTitle => {
                state.title = Some(text);
                state.stage = Stage::GetDescription;
                self.sessions.insert(user.clone(), state);
                vec![Reply::Text(messages::ASK_DESCRIPTION.into())]
            }
            Stage::GetDescription => self.submit_issue(user, state, text).await,
            // A button press is expected here; free text is ignored.
            Stage::SelectAccount | Stage::SelectProject => vec![],
        }
    }

    /// Terminal step: the conversation ends here whether the issue is
    /// created or not.
    async fn submit_issue(
        &self,
        user: &ChatUserId,
        state: ConversationState,
        description: String,
    ) -> Vec<Reply> {
        self.sessions.remove(user);

        let Some(account) = state.selected_account else {
            warn!(%user, "conversation reached submission without an account");
            return vec![Reply::Text(messages::ACCOUNT_MISSING.into())];
        };
        let (Some(repo), Some(title)) = (state.selected_repo, state.title) else {
            warn!(%user, "conversation reached submission incomplete");
            return vec![Reply::Text(messages::NO_SESSION.into())];
        };

        let token = match self.store.get(user).await {
            Ok(token) => token,
            Err(err) => {
                error!(%user, error = %err, "credential lookup failed");
                return vec![Reply::Text(messages::STORE_UNAVAILABLE.into())];
            }
        };

        let issue = NewIssue {
            title,
            body: description,
        };
        match self
            .github
            .create_issue(token.as_deref(), &account.login, &repo, &issue)
            .await
        {
            Ok(created) => vec![Reply::Text(messages::issue_created(&created.html_url))],
            Err(err) => {
                error!(%user, repo = %repo, error = %err, "issue creation failed");
                vec![Reply::Text(messages::CREATE_FAILED.into())]
            }
        }
    }
}
