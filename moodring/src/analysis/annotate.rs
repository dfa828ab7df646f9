use crate::error::Result;
use crate::models::{Message, ScoredMessage};
use crate::sentiment::Scorer;

/// Score every message, preserving input order and length.
///
/// Messages are scored independently; the first model failure aborts the
/// whole batch.
pub fn annotate(scorer: &Scorer, messages: &[Message]) -> Result<Vec<ScoredMessage>> {
    let scored = messages
        .iter()
        .map(|message| {
            let score = scorer.score(message.text.as_deref())?;
            Ok(ScoredMessage::new(message.clone(), score))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = scored.len(), "Annotated messages");
    Ok(scored)
}
