use libsql::{Builder, Connection};
use std::path::Path;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::{MoodError, Result};

/// Read-only handle on a Messages database.
pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    pub(crate) busy_timeout_ms: u64,
}

impl Database {
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let db = if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            // libsql creates missing files; an empty database would only hide a wrong path
            if !Path::new(path).exists() {
                return Err(MoodError::Validation(format!(
                    "Messages database not found at '{path}'. Copy ~/Library/Messages/chat.db or set CHAT_DB_PATH."
                )));
            }
            Builder::new_local(path).build().await?
        };

        tracing::debug!(url = %config.url, "Opened messages database");

        Ok(Self {
            db: Arc::new(db),
            busy_timeout_ms: config.busy_timeout_ms,
        })
    }

    /// Open a connection with `query_only` set, so nothing can write to the archive.
    pub async fn connect(&self) -> Result<Connection> {
        let conn = self.db.connect()?;
        self.configure_connection(&conn).await;
        Ok(conn)
    }

    async fn configure_connection(&self, conn: &Connection) {
        let busy_timeout_sql = format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms);
        if let Err(error) = conn.execute_batch(&busy_timeout_sql).await {
            tracing::warn!(
                busy_timeout_ms = self.busy_timeout_ms,
                error = %error,
                "Failed to set SQLite busy_timeout"
            );
        }

        if let Err(error) = conn.execute_batch("PRAGMA query_only = ON").await {
            tracing::warn!(error = %error, "Failed to set SQLite query_only pragma");
        }
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}
