// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Octogram bot.
//!
//! Provides the error taxonomy, domain types, and the trait seams
//! (`CredentialStore`, `GithubApi`) that the other workspace crates
//! implement or consume.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AuthError, OctogramError};
pub use traits::{CredentialStore, GithubApi};
pub use types::{Account, AccountKind, ChatUserId, CreatedIssue, NewIssue};
