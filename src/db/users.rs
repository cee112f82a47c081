// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::user::{Role, User};
use crate::errors::ServerError;

/// Insert a user row. Every login/register mints a fresh identity, so
/// this is a plain insert, never an upsert.
pub fn insert_user(conn: &Connection, user: &User, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "insert into users (id, name, role, created_at) values (?, ?, ?, ?)",
        params![user.id, user.name, user.role.as_str(), now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;
    Ok(())
}

/// Look up a display name for a user id. Issue and schedule records
/// keep referencing ids after logout, so a miss is not an error.
pub fn find_user_name(conn: &Connection, user_id: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select name from users where id = ?",
        params![user_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

pub(crate) fn role_from_db(raw: &str) -> Result<Role, ServerError> {
    Role::parse(raw).ok_or_else(|| ServerError::DbError(format!("unknown role in users table: {raw}")))
}
