use std::sync::Arc;

use crate::error::Result;
use crate::models::ScoreVector;

use super::model::SentimentModel;

/// Scores optional message text with an injected [`SentimentModel`].
#[derive(Clone)]
pub struct Scorer {
    model: Arc<dyn SentimentModel>,
}

impl Scorer {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Missing or blank text is [`ScoreVector::NEUTRAL`] and never reaches the model.
    pub fn score(&self, text: Option<&str>) -> Result<ScoreVector> {
        match text.filter(|t| !t.trim().is_empty()) {
            Some(text) => self.model.polarity_scores(text),
            None => Ok(ScoreVector::NEUTRAL),
        }
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer").finish_non_exhaustive()
    }
}
