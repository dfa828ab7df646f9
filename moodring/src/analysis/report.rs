use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MoodError, Result};
use crate::models::{
    DirectionSummary, Extremes, Message, MonthlySummary, PartnerCount, PartnerSummary,
    ScoredMessage, WeekdaySummary,
};
use crate::sentiment::Scorer;

use super::extremes::direction_label;
use super::{
    aggregate_by_direction, aggregate_by_month, aggregate_by_partner, aggregate_by_weekday,
    annotate, count_by_partner, select_extremes,
};

/// Everything the `analyze` command reports for one batch of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_messages: usize,
    pub partner_counts: Vec<PartnerCount>,
    /// `None` when there are no sent messages.
    pub sent_extremes: Option<Extremes>,
    /// `None` when there are no received messages.
    pub received_extremes: Option<Extremes>,
    pub partner_means: PartnerSummary,
    pub direction: BTreeMap<String, DirectionSummary>,
    pub weekdays: Vec<WeekdaySummary>,
    /// Oldest month first.
    pub months: Vec<MonthlySummary>,
    #[serde(skip)]
    pub scored: Vec<ScoredMessage>,
}

impl AnalysisReport {
    pub fn build(scorer: &Scorer, messages: &[Message]) -> Result<Self> {
        let scored = annotate(scorer, messages)?;

        let report = Self {
            total_messages: scored.len(),
            partner_counts: count_by_partner(messages),
            sent_extremes: extremes_or_none(&scored, true)?,
            received_extremes: extremes_or_none(&scored, false)?,
            partner_means: aggregate_by_partner(&scored),
            direction: aggregate_by_direction(&scored),
            weekdays: aggregate_by_weekday(&scored),
            months: aggregate_by_month(&scored),
            scored,
        };

        tracing::info!(
            messages = report.total_messages,
            partners = report.partner_means.len(),
            "Built analysis report"
        );
        Ok(report)
    }

    /// Partners sorted by the absolute sent/received gap, widest first.
    pub fn widest_gaps(&self) -> Vec<(&str, f64)> {
        let mut gaps: Vec<(&str, f64)> = self
            .direction
            .iter()
            .filter_map(|(partner, summary)| Some((partner.as_str(), summary.gap?)))
            .collect();
        gaps.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        gaps
    }
}

fn extremes_or_none(scored: &[ScoredMessage], is_from_me: bool) -> Result<Option<Extremes>> {
    match select_extremes(scored, is_from_me) {
        Ok(extremes) => Ok(Some(extremes)),
        Err(MoodError::EmptyInput(_)) => {
            tracing::info!(
                direction = direction_label(is_from_me),
                "No messages in direction, skipping extremes"
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
