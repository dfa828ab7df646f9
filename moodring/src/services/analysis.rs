use std::sync::Arc;

use crate::analysis::{count_by_partner, AnalysisReport};
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{Message, PartnerCount, ScoreVector, TableSchema};
use crate::sentiment::Scorer;

/// Wires a message store to the scoring pipeline.
#[derive(Clone)]
pub struct AnalysisService {
    db: Arc<dyn DatabaseBackend>,
    scorer: Scorer,
    message_limit: Option<u64>,
}

impl AnalysisService {
    pub fn new(db: Arc<dyn DatabaseBackend>, scorer: Scorer, message_limit: Option<u64>) -> Self {
        Self {
            db,
            scorer,
            message_limit,
        }
    }

    pub async fn tables(&self) -> Result<Vec<TableSchema>> {
        self.db.list_tables().await
    }

    pub async fn messages(&self) -> Result<Vec<Message>> {
        let messages = self.db.load_messages(self.message_limit).await?;
        tracing::info!(count = messages.len(), "Loaded messages");
        Ok(messages)
    }

    pub async fn partner_counts(&self) -> Result<Vec<PartnerCount>> {
        let messages = self.messages().await?;
        Ok(count_by_partner(&messages))
    }

    pub fn score_text(&self, text: &str) -> Result<ScoreVector> {
        self.scorer.score(Some(text))
    }

    pub async fn analyze(&self) -> Result<AnalysisReport> {
        let messages = self.messages().await?;
        AnalysisReport::build(&self.scorer, &messages)
    }
}
