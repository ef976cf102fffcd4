// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub integration for the Octogram bot.
//!
//! Two surfaces: [`GithubClient`], the REST client behind the
//! `octogram_core::GithubApi` trait, and [`OauthFlow`], which handles the
//! OAuth web application handshake that turns a Telegram user into a
//! stored access token.

pub mod client;
pub mod oauth;

pub use client::GithubClient;
pub use oauth::OauthFlow;
