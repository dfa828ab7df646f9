// Common test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Once};

use chrono::{NaiveDate, NaiveDateTime};
use moodring::error::{MoodError, Result};
use moodring::models::{Message, ScoreVector};
use moodring::sentiment::{Scorer, SentimentModel};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Model that returns a fixed compound per known text and fails on anything else.
pub struct StubModel {
    compounds: HashMap<String, f64>,
}

impl StubModel {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            compounds: entries
                .iter()
                .map(|(text, compound)| (text.to_string(), *compound))
                .collect(),
        }
    }
}

impl SentimentModel for StubModel {
    fn polarity_scores(&self, text: &str) -> Result<ScoreVector> {
        let compound = *self
            .compounds
            .get(text)
            .ok_or_else(|| MoodError::Scoring(format!("unexpected text: {text}")))?;
        let score = if compound > 0.0 {
            ScoreVector::new(0.0, 0.5, 0.5, compound)
        } else if compound < 0.0 {
            ScoreVector::new(0.5, 0.5, 0.0, compound)
        } else {
            ScoreVector::NEUTRAL
        };
        Ok(score)
    }
}

pub fn stub_scorer(entries: &[(&str, f64)]) -> Scorer {
    Scorer::new(Arc::new(StubModel::new(entries)))
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn message(text: Option<&str>, is_from_me: bool, partner: &str, ts: NaiveDateTime) -> Message {
    Message::new(text.map(str::to_string), is_from_me, partner, ts)
}

/// Write a minimal chat.db with the `handle` and `message` tables.
pub async fn write_chat_db(path: &Path) {
    let db = libsql::Builder::new_local(path.display().to_string())
        .build()
        .await
        .unwrap();
    let conn = db.connect().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE handle (
            ROWID INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
            id TEXT NOT NULL,
            service TEXT NOT NULL DEFAULT 'iMessage'
        );
        CREATE TABLE message (
            ROWID INTEGER PRIMARY KEY AUTOINCREMENT,
            guid TEXT UNIQUE NOT NULL,
            text TEXT,
            handle_id INTEGER DEFAULT 0,
            date INTEGER,
            is_from_me INTEGER DEFAULT 0
        );
        CREATE TABLE chat (ROWID INTEGER PRIMARY KEY AUTOINCREMENT, guid TEXT);
        INSERT INTO handle (ROWID, id) VALUES (1, '+15550100'), (2, 'sam@example.com');
        INSERT INTO message (guid, text, handle_id, date, is_from_me) VALUES
            ('g1', 'I love this!', 1, 668088000000000000, 1),
            ('g2', NULL, 1, 668088060000000000, 1),
            ('g3', 'I hate this.', 2, 668164530000000000, 0),
            ('g4', 'Thanks, that was really helpful', 2, 668164590000000000, 0),
            ('g5', 'orphaned', 0, 668164600000000000, 0);
        "#,
    )
    .await
    .unwrap();
}
