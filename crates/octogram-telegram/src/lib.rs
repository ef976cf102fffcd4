// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the Octogram bot.
//!
//! Long-polls the Telegram Bot API via teloxide, translates messages and
//! button presses into conversation engine events, and renders the
//! engine's replies back as messages and inline keyboards. Only private
//! chats are served; group messages are ignored.

pub mod handler;
pub mod render;

use std::sync::Arc;

use teloxide::dptree;
use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

use octogram_config::model::TelegramConfig;
use octogram_conversation::{ChatEvent, Command, ConversationEngine, Reply};
use octogram_core::{ChatUserId, OctogramError};
use octogram_github::OauthFlow;

use handler::SlashCommand;

/// The Telegram front end: one long-polling dispatcher wired to the
/// conversation engine and the OAuth flow.
pub struct TelegramBot {
    bot: Bot,
    engine: Arc<ConversationEngine>,
    oauth: Arc<OauthFlow>,
}

impl TelegramBot {
    /// Creates the bot. Requires `config.bot_token` to be set.
    pub fn new(
        config: &TelegramConfig,
        engine: Arc<ConversationEngine>,
        oauth: Arc<OauthFlow>,
    ) -> Result<Self, OctogramError> {
        let token = config
            .bot_token
            .as_deref()
            .ok_or_else(|| OctogramError::Config("telegram.bot_token is required".into()))?;
        if token.is_empty() {
            return Err(OctogramError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
            engine,
            oauth,
        })
    }

    /// Run the long-polling dispatcher until the process shuts down.
    pub async fn run(self) {
        let engine = self.engine.clone();
        let oauth = self.oauth.clone();
        let message_branch =
            Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let engine = engine.clone();
                let oauth = oauth.clone();
                async move {
                    handle_message(&bot, &msg, &engine, &oauth).await;
                    respond(())
                }
            });

        let engine = self.engine.clone();
        let callback_branch =
            Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let engine = engine.clone();
                async move {
                    handle_callback(&bot, &q, &engine).await;
                    respond(())
                }
            });

        info!("starting Telegram long polling");
        Dispatcher::builder(
            self.bot,
            dptree::entry()
                .branch(message_branch)
                .branch(callback_branch),
        )
        .default_handler(|_| async {}) // Silently ignore other update kinds.
        .build()
        .dispatch()
        .await;
    }
}

async fn handle_message(
    bot: &Bot,
    msg: &Message,
    engine: &ConversationEngine,
    oauth: &OauthFlow,
) {
    if !handler::is_dm(msg) {
        debug!(chat_id = msg.chat.id.0, "ignoring non-DM message");
        return;
    }
    let Some(user) = handler::chat_user_id(msg) else {
        return;
    };
    let Some(text) = msg.text() else {
        debug!(msg_id = msg.id.0, "ignoring non-text message");
        return;
    };

    let event = match handler::parse_command(text) {
        Some(SlashCommand::Login) => {
            let url = oauth.authorize_url(&user);
            send_replies(
                bot,
                msg.chat.id,
                vec![Reply::Text(format!("Login with GitHub: {url}"))],
            )
            .await;
            return;
        }
        Some(SlashCommand::Start) => ChatEvent::Command(Command::Start),
        Some(SlashCommand::Cancel) => ChatEvent::Command(Command::Cancel),
        None => ChatEvent::Text(text.to_string()),
    };

    let replies = engine.handle_event(&user, event).await;
    send_replies(bot, msg.chat.id, replies).await;
}

async fn handle_callback(bot: &Bot, q: &CallbackQuery, engine: &ConversationEngine) {
    // Stop the button's loading spinner whatever happens next.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "failed to answer callback query");
    }

    let Some(data) = q.data.clone() else {
        return;
    };
    let user = ChatUserId::from(q.from.id.0);
    let replies = engine.handle_event(&user, ChatEvent::Selection(data)).await;

    match q.message.as_ref() {
        Some(message) => {
            let chat_id = message.chat().id;
            let mut replies = replies.into_iter();
            // The first reply replaces the prompt the button belonged to.
            if let Some(first) = replies.next() {
                let result = match first {
                    Reply::Text(text) => bot
                        .edit_message_text(chat_id, message.id(), text)
                        .await
                        .map(|_| ()),
                    Reply::Choices { prompt, options } => bot
                        .edit_message_text(chat_id, message.id(), prompt)
                        .reply_markup(render::choices_keyboard(&options))
                        .await
                        .map(|_| ()),
                };
                if let Err(e) = result {
                    error!(error = %e, "failed to edit Telegram message");
                }
            }
            send_replies(bot, chat_id, replies.collect()).await;
        }
        None => {
            // The originating message is inaccessible; fall back to the
            // sender's DM chat.
            let chat_id = ChatId(q.from.id.0 as i64);
            send_replies(bot, chat_id, replies).await;
        }
    }
}

async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>) {
    for reply in replies {
        let result = match reply {
            Reply::Text(text) => bot.send_message(chat_id, text).await.map(|_| ()),
            Reply::Choices { prompt, options } => bot
                .send_message(chat_id, prompt)
                .reply_markup(render::choices_keyboard(&options))
                .await
                .map(|_| ()),
        };
        if let Err(e) = result {
            error!(error = %e, "failed to send Telegram message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octogram_config::model::GithubConfig;
    use octogram_core::{Account, CreatedIssue, CredentialStore, GithubApi, NewIssue};

    struct NullStore;

    #[async_trait::async_trait]
    impl CredentialStore for NullStore {
        async fn put(&self, _id: &ChatUserId, _token: &str) -> Result<(), OctogramError> {
            Ok(())
        }
        async fn get(&self, _id: &ChatUserId) -> Result<Option<String>, OctogramError> {
            Ok(None)
        }
    }

    struct NullGithub;

    #[async_trait::async_trait]
    impl GithubApi for NullGithub {
        async fn list_accounts(
            &self,
            _token: Option<&str>,
        ) -> Result<Vec<Account>, OctogramError> {
            Ok(vec![])
        }
        async fn list_repos(
            &self,
            _token: Option<&str>,
            _account: &Account,
        ) -> Result<Vec<String>, OctogramError> {
            Ok(vec![])
        }
        async fn create_issue(
            &self,
            _token: Option<&str>,
            _owner: &str,
            _repo: &str,
            _issue: &NewIssue,
        ) -> Result<CreatedIssue, OctogramError> {
            Err(OctogramError::Internal("unused".into()))
        }
    }

    fn engine() -> Arc<ConversationEngine> {
        Arc::new(ConversationEngine::new(
            Arc::new(NullStore),
            Arc::new(NullGithub),
        ))
    }

    fn oauth() -> Arc<OauthFlow> {
        let github = GithubConfig {
            client_id: Some("iv1.abc".into()),
            client_secret: Some("s3cret".into()),
            webhook_secret: Some("hush".into()),
            callback_domain: Some("bot.example.com".into()),
            ..GithubConfig::default()
        };
        Arc::new(OauthFlow::new(&github).unwrap())
    }

    #[test]
    fn new_requires_bot_token() {
        let config = TelegramConfig { bot_token: None };
        assert!(TelegramBot::new(&config, engine(), oauth()).is_err());
    }

    #[test]
    fn new_rejects_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(String::new()),
        };
        assert!(TelegramBot::new(&config, engine(), oauth()).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let config = TelegramConfig {
            bot_token: Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".into()),
        };
        assert!(TelegramBot::new(&config, engine(), oauth()).is_ok());
    }
}
