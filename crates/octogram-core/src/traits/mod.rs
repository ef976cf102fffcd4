// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the Octogram crates.
//!
//! All traits use `#[async_trait]` so they can be held as trait objects
//! across crate boundaries.

pub mod credentials;
pub mod github;

pub use credentials::CredentialStore;
pub use github::GithubApi;
