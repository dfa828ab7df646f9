use crate::error::Result;
use crate::models::ScoreVector;

/// A sentiment model that maps non-empty text to its four score components.
///
/// Implementations must be pure with respect to the text: the same input
/// always yields the same scores. Failures are fatal to the caller.
pub trait SentimentModel: Send + Sync {
    fn polarity_scores(&self, text: &str) -> Result<ScoreVector>;
}
