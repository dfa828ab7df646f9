use chrono::{Datelike, Weekday};
use std::collections::BTreeMap;

use crate::models::{
    DirectionSummary, Message, MonthlySummary, PartnerCount, PartnerSummary, ScoredMessage,
    WeekdaySummary,
};

/// Mean compound score per partner.
///
/// Every distinct partner appears exactly once. Values are summed in sorted
/// order so the result does not depend on the order of the input.
pub fn aggregate_by_partner(messages: &[ScoredMessage]) -> PartnerSummary {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for message in messages {
        groups
            .entry(message.partner_id().to_string())
            .or_default()
            .push(message.compound());
    }

    groups
        .into_iter()
        .filter_map(|(partner, mut compounds)| mean(&mut compounds).map(|m| (partner, m)))
        .collect()
}

/// Number of messages exchanged with each partner, busiest first.
pub fn count_by_partner(messages: &[Message]) -> Vec<PartnerCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for message in messages {
        *counts.entry(message.partner_id.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<PartnerCount> = counts
        .into_iter()
        .map(|(partner_id, count)| PartnerCount {
            partner_id: partner_id.to_string(),
            count,
        })
        .collect();
    // BTreeMap order already breaks ties by partner id; the sort is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Sent versus received mean compound per partner.
pub fn aggregate_by_direction(messages: &[ScoredMessage]) -> BTreeMap<String, DirectionSummary> {
    let mut groups: BTreeMap<String, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for message in messages {
        let (sent, received) = groups.entry(message.partner_id().to_string()).or_default();
        if message.is_from_me() {
            sent.push(message.compound());
        } else {
            received.push(message.compound());
        }
    }

    groups
        .into_iter()
        .map(|(partner, (mut sent, mut received))| {
            let summary = DirectionSummary::new(
                mean(&mut sent),
                mean(&mut received),
                sent.len(),
                received.len(),
            );
            (partner, summary)
        })
        .collect()
}

/// Mean compound per day of the week, Monday first. Days without messages are omitted.
pub fn aggregate_by_weekday(messages: &[ScoredMessage]) -> Vec<WeekdaySummary> {
    let mut days: [Vec<f64>; 7] = Default::default();
    for message in messages {
        let index = message.message.timestamp.weekday().num_days_from_monday() as usize;
        days[index].push(message.compound());
    }

    days.iter_mut()
        .enumerate()
        .filter_map(|(index, compounds)| {
            let count = compounds.len();
            let mean_compound = mean(compounds)?;
            Some(WeekdaySummary {
                weekday: weekday_from_monday(index),
                count,
                mean_compound,
            })
        })
        .collect()
}

/// Mean compound per calendar month, oldest first. Months without messages are omitted.
pub fn aggregate_by_month(messages: &[ScoredMessage]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for message in messages {
        let timestamp = message.message.timestamp;
        months
            .entry((timestamp.year(), timestamp.month()))
            .or_default()
            .push(message.compound());
    }

    months
        .into_iter()
        .filter_map(|((year, month), mut compounds)| {
            let count = compounds.len();
            Some(MonthlySummary {
                year,
                month,
                count,
                mean_compound: mean(&mut compounds)?,
            })
        })
        .collect()
}

fn weekday_from_monday(index: usize) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

fn mean(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
