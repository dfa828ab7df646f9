use libsql::{params, Connection};

use crate::db::apple_time;
use crate::error::Result;
use crate::models::Message;

const MESSAGE_QUERY: &str = r#"
    SELECT m.text, m.is_from_me, h.id, m.date
    FROM message m
    JOIN handle h ON m.handle_id = h.ROWID
    ORDER BY m.ROWID
"#;

pub struct MessageRepository;

/// SQLite reads a negative LIMIT as unlimited, so large values saturate instead of wrapping.
fn sql_limit(limit: u64) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

impl MessageRepository {
    /// Messages joined with their partner handle, oldest row first.
    ///
    /// Rows without a handle id or a usable date are skipped with a warning.
    pub async fn load(conn: &Connection, limit: Option<u64>) -> Result<Vec<Message>> {
        let mut rows = match limit {
            Some(limit) => {
                let sql = format!("{MESSAGE_QUERY} LIMIT ?1");
                conn.query(&sql, params![sql_limit(limit)]).await?
            }
            None => conn.query(MESSAGE_QUERY, ()).await?,
        };

        let mut messages = Vec::new();
        let mut skipped = 0usize;
        while let Some(row) = rows.next().await? {
            match Self::row_to_message(&row)? {
                Some(message) => messages.push(message),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Skipped malformed message rows");
        }
        tracing::debug!(count = messages.len(), "Loaded messages");

        Ok(messages)
    }

    fn row_to_message(row: &libsql::Row) -> Result<Option<Message>> {
        let text: Option<String> = row.get(0)?;
        let is_from_me: Option<i64> = row.get(1)?;
        let partner_id: Option<String> = row.get(2)?;
        let raw_date: Option<i64> = row.get(3)?;

        let Some(partner_id) = partner_id else {
            tracing::debug!("Message row without handle id");
            return Ok(None);
        };
        let Some(timestamp) = raw_date.and_then(apple_time::to_local) else {
            tracing::debug!(partner_id = %partner_id, raw_date = ?raw_date, "Message row without usable date");
            return Ok(None);
        };

        Ok(Some(Message {
            text,
            is_from_me: is_from_me.unwrap_or(0) != 0,
            partner_id,
            timestamp,
        }))
    }
}
