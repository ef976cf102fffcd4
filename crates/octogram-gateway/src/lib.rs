// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP front door for the Octogram bot.
//!
//! One axum listener serves everything that must be reachable from the
//! outside: GitHub's OAuth callback redirect, the webhook receiver with
//! HMAC-SHA256 signature verification, and the static support and privacy
//! pages.

pub mod handlers;
pub mod pages;
pub mod server;
pub mod signature;

pub use server::{router, start_server, GatewayState};
pub use signature::verify_signature;
