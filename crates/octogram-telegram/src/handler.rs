// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message classification and content extraction.
//!
//! Pure functions that turn a Telegram message into something the
//! conversation engine understands, so they can be tested without a
//! network.

use teloxide::prelude::*;
use teloxide::types::ChatKind;

use octogram_core::ChatUserId;

/// The slash commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// Begin the GitHub OAuth login.
    Login,
    /// Begin the issue-filing conversation.
    Start,
    /// Abandon the conversation.
    Cancel,
}

/// Parse the leading slash command out of a message text, if any.
///
/// Tolerates the `@botname` suffix Telegram appends in group contexts
/// (`/start@octogram_bot`) and trailing arguments. Unrecognized commands
/// and plain text both return `None`.
pub fn parse_command(text: &str) -> Option<SlashCommand> {
    let first = text.trim().split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    let command = first.split('@').next()?;
    match command {
        "/login" => Some(SlashCommand::Login),
        "/start" => Some(SlashCommand::Start),
        "/cancel" => Some(SlashCommand::Cancel),
        _ => None,
    }
}

/// Checks whether the message is from a private (DM) chat.
///
/// Group, supergroup, and channel messages return `false`.
pub fn is_dm(msg: &Message) -> bool {
    matches!(msg.chat.kind, ChatKind::Private(_))
}

/// The sender's id as the engine's user identity.
///
/// Messages without a sender (e.g. channel posts) return `None`.
pub fn chat_user_id(msg: &Message) -> Option<ChatUserId> {
    msg.from.as_ref().map(|u| ChatUserId::from(u.id.0))
}
