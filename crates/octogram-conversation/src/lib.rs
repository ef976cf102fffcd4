// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The issue-filing conversation state machine.
//!
//! Channel-neutral: the engine consumes [`ChatEvent`]s and produces
//! [`Reply`]s, with the Telegram adapter doing the translation at the
//! edges. Sessions are in-memory and per-user; a process restart drops
//! in-flight conversations but never stored credentials.

pub mod engine;
pub mod event;
pub mod messages;
pub mod state;

pub use engine::ConversationEngine;
pub use event::{ChatEvent, Command, Reply};
pub use state::{ConversationState, Stage};
