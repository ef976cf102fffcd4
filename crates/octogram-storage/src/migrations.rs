// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema migrations for the credential database.
//!
//! The SQL under `migrations/` is baked into the binary with refinery's
//! `embed_migrations!`, so a deployed octogram needs no migration files on
//! disk. [`Database::open`](crate::database::Database::open) applies any
//! pending migration before handing out the connection; reopening an
//! already-migrated database is a no-op because refinery records what it
//! has applied in `refinery_schema_history`.

use octogram_core::OctogramError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Bring `conn` up to the current schema.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), OctogramError> {
    embedded::migrations::runner().run(conn).map_err(|e| {
        OctogramError::Store {
            source: Box::new(e),
        }
    })?;
    Ok(())
}
