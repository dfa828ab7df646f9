use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ScoredMessage;

/// Mean compound score keyed by partner id.
pub type PartnerSummary = BTreeMap<String, f64>;

/// The most positive and most negative message of one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub most_positive: ScoredMessage,
    pub most_negative: ScoredMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerCount {
    pub partner_id: String,
    pub count: usize,
}

/// Sent versus received sentiment for one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionSummary {
    pub sent_mean: Option<f64>,
    pub received_mean: Option<f64>,
    pub sent_count: usize,
    pub received_count: usize,
    /// `sent - received`, when both sides have at least one message.
    pub gap: Option<f64>,
}

impl DirectionSummary {
    pub fn new(
        sent_mean: Option<f64>,
        received_mean: Option<f64>,
        sent_count: usize,
        received_count: usize,
    ) -> Self {
        let gap = sent_mean.zip(received_mean).map(|(sent, received)| sent - received);
        Self {
            sent_mean,
            received_mean,
            sent_count,
            received_count,
            gap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySummary {
    pub weekday: Weekday,
    pub count: usize,
    pub mean_compound: f64,
}

/// Message count and mean compound for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub count: usize,
    pub mean_compound: f64,
}

impl MonthlySummary {
    /// `YYYY-MM` label.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gap_requires_both_directions() {
        let both = DirectionSummary::new(Some(0.5), Some(-0.25), 2, 1);
        assert_eq!(both.gap, Some(0.75));

        let sent_only = DirectionSummary::new(Some(0.5), None, 2, 0);
        assert_eq!(sent_only.gap, None);
    }

    #[test]
    fn test_gap_is_serialized() {
        let value = serde_json::to_value(DirectionSummary::new(Some(0.5), Some(0.25), 1, 1)).unwrap();
        assert_eq!(value["gap"], 0.25);

        let value = serde_json::to_value(DirectionSummary::new(None, Some(0.25), 0, 1)).unwrap();
        assert!(value["gap"].is_null());
    }

    #[test]
    fn test_month_label_is_zero_padded() {
        let summary = MonthlySummary {
            year: 2022,
            month: 3,
            count: 1,
            mean_compound: 0.0,
        };
        assert_eq!(summary.label(), "2022-03");
    }
}
