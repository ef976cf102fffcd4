// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub access token CRUD, keyed by chat user id.

use rusqlite::params;

use octogram_core::{ChatUserId, OctogramError};

use crate::database::Database;

/// Insert or replace the access token for a chat user.
pub async fn put_token(
    db: &Database,
    id: &ChatUserId,
    access_token: &str,
) -> Result<(), OctogramError> {
    let id = id.to_string();
    let access_token = access_token.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO user_tokens (telegram_id, access_token)
                 VALUES (?1, ?2)
                 ON CONFLICT(telegram_id) DO UPDATE SET access_token = excluded.access_token",
                params![id, access_token],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get the access token for a chat user, if one was stored.
pub async fn get_token(db: &Database, id: &ChatUserId) -> Result<Option<String>, OctogramError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt =
                conn.prepare("SELECT access_token FROM user_tokens WHERE telegram_id = ?1")?;
            let result = stmt.query_row(params![id], |row| row.get::<_, String>(0));
            match result {
                Ok(token) => Ok(Some(token)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("tokens.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn put_and_get_token_roundtrips() {
        let (db, _dir) = setup_db().await;
        let id = ChatUserId::from(42u64);

        put_token(&db, &id, "gho_abc123").await.unwrap();
        let token = get_token(&db, &id).await.unwrap();
        assert_eq!(token.as_deref(), Some("gho_abc123"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn put_token_replaces_existing_token() {
        let (db, _dir) = setup_db().await;
        let id = ChatUserId::from(42u64);

        put_token(&db, &id, "gho_old").await.unwrap();
        put_token(&db, &id, "gho_new").await.unwrap();

        let token = get_token(&db, &id).await.unwrap();
        assert_eq!(token.as_deref(), Some("gho_new"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_token_for_unknown_user_returns_none() {
        let (db, _dir) = setup_db().await;
        let token = get_token(&db, &ChatUserId::from(7u64)).await.unwrap();
        assert!(token.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn tokens_are_isolated_per_user() {
        let (db, _dir) = setup_db().await;
        let alice = ChatUserId::from(1u64);
        let bob = ChatUserId::from(2u64);

        put_token(&db, &alice, "gho_alice").await.unwrap();
        put_token(&db, &bob, "gho_bob").await.unwrap();

        assert_eq!(
            get_token(&db, &alice).await.unwrap().as_deref(),
            Some("gho_alice")
        );
        assert_eq!(
            get_token(&db, &bob).await.unwrap().as_deref(),
            Some("gho_bob")
        );

        db.close().await.unwrap();
    }
}
