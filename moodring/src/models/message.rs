use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ScoreVector;

/// One message row as produced by a [`crate::db::MessageSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: Option<String>,
    pub is_from_me: bool,
    /// Handle of the conversation partner (phone number or email address).
    pub partner_id: String,
    /// Local wall-clock time the message was sent or received.
    pub timestamp: NaiveDateTime,
}

impl Message {
    pub fn new(
        text: Option<String>,
        is_from_me: bool,
        partner_id: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            text,
            is_from_me,
            partner_id: partner_id.into(),
            timestamp,
        }
    }
}

/// A message together with the score derived from its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMessage {
    #[serde(flatten)]
    pub message: Message,
    #[serde(flatten)]
    pub score: ScoreVector,
}

impl ScoredMessage {
    pub fn new(message: Message, score: ScoreVector) -> Self {
        Self { message, score }
    }

    pub fn compound(&self) -> f64 {
        self.score.compound
    }

    pub fn is_from_me(&self) -> bool {
        self.message.is_from_me
    }

    pub fn partner_id(&self) -> &str {
        &self.message.partner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 3, 4)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_scored_message_serializes_flat() {
        let scored = ScoredMessage::new(
            Message::new(Some("hi".to_string()), false, "a@example.com", ts()),
            ScoreVector::NEUTRAL,
        );
        let value = serde_json::to_value(&scored).unwrap();

        assert_eq!(value["partner_id"], "a@example.com");
        assert_eq!(value["neutral"], 1.0);
        assert_eq!(value["timestamp"], "2022-03-04T18:30:00");
    }
}
