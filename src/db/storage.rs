// src/db/storage.rs
//
// The persistence port the domain stores write through. Same contract
// as the browser's local storage: UTF-8 strings keyed by namespace,
// each value replaced whole on every write.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::errors::ServerError;

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove(&self, key: &str) -> Result<(), ServerError>;
}

/// Production backend: one row per namespace in the `storage` table.
#[derive(Clone)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "select value from storage where key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("storage read failed: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let now = Utc::now().timestamp();
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                insert into storage (key, value, updated_at)
                values (?, ?, ?)
                on conflict(key) do update set
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("storage write failed: {e}")))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute("delete from storage where key = ?", params![key])
                .map_err(|e| ServerError::DbError(format!("storage delete failed: {e}")))?;
            Ok(())
        })
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
