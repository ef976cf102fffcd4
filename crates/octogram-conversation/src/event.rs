// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel-neutral events in and replies out.
//!
//! The Telegram adapter translates updates into [`ChatEvent`]s and renders
//! [`Reply`]s back into messages and inline keyboards. The engine never
//! sees transport types.

/// Slash commands the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin the issue-filing conversation.
    Start,
    /// Abandon the conversation, discarding everything collected.
    Cancel,
}

/// One inbound event from a chat user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A recognized slash command.
    Command(Command),
    /// A button press carrying its callback payload.
    Selection(String),
    /// Free text.
    Text(String),
}

/// One outbound reply to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message.
    Text(String),
    /// A prompt with one button per option; each option is
    /// `(label, callback payload)`.
    Choices {
        prompt: String,
        options: Vec<(String, String)>,
    },
}
