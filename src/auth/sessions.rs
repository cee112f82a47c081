// src/auth/sessions.rs
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::db::users::role_from_db;
use crate::domain::user::User;
use crate::errors::ServerError;

const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Generate a URL-safe session token from 32 OS-random bytes.
/// Base64 no-pad keeps it safe inside a cookie without encoding.
fn generate_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

/// SHA-256 of the raw token; only the hash ever touches the DB.
fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

/// Open a session for a user and return the raw token for the cookie.
pub fn create_session(conn: &Connection, user_id: &str, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token();
    let hash = hash_token(&raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Resolve a raw cookie token to its user, if the session is live.
pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<User>, ServerError> {
    let hash = hash_token(raw_token);

    let row: Option<(String, String, String)> = conn
        .query_row(
            r#"
            select u.id, u.name, u.role
            from sessions s
            join users u on u.id = s.user_id
            where s.token_hash = ?
              and s.expires_at > ?
              and s.revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    match row {
        Some((id, name, role)) => Ok(Some(User {
            id,
            name,
            role: role_from_db(&role)?,
        })),
        None => Ok(None),
    }
}

/// Revoke a session at logout. Revoking an unknown or already-revoked
/// token is a no-op.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;

    Ok(())
}
