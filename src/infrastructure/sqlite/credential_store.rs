use crate::domain::error::DomainError;
use crate::domain::ports::credential_store::CredentialStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const API_KEY_SETTING: &str = "alpha_vantage_api_key";

pub struct SqliteCredentialStore {
    conn: Mutex<Connection>,
}

impl SqliteCredentialStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn get_api_key(&self) -> Result<Option<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![API_KEY_SETTING],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DomainError::Database(format!("Failed to read API key: {e}")))
    }

    fn set_api_key(&self, key: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![API_KEY_SETTING, key, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save API key: {e}")))?;
        Ok(())
    }

    fn clear_api_key(&self) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute("DELETE FROM settings WHERE key = ?1", params![API_KEY_SETTING])
            .map_err(|e| DomainError::Database(format!("Failed to clear API key: {e}")))?;
        Ok(())
    }
}
