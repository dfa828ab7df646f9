use crate::error::{MoodError, Result};
use crate::models::{Extremes, ScoredMessage};

/// Most positive and most negative message for one direction.
///
/// Ties resolve to the earliest message in input order. Fails with
/// [`MoodError::EmptyInput`] when no message matches `is_from_me`.
pub fn select_extremes(messages: &[ScoredMessage], is_from_me: bool) -> Result<Extremes> {
    let mut matching = messages.iter().filter(|m| m.is_from_me() == is_from_me);

    let first = matching.next().ok_or_else(|| {
        MoodError::EmptyInput(format!(
            "no {} messages to select extremes from",
            direction_label(is_from_me)
        ))
    })?;

    let mut most_positive = first;
    let mut most_negative = first;
    for message in matching {
        // strict comparisons keep the first occurrence on ties
        if message.compound() > most_positive.compound() {
            most_positive = message;
        }
        if message.compound() < most_negative.compound() {
            most_negative = message;
        }
    }

    Ok(Extremes {
        most_positive: most_positive.clone(),
        most_negative: most_negative.clone(),
    })
}

pub(crate) fn direction_label(is_from_me: bool) -> &'static str {
    if is_from_me {
        "sent"
    } else {
        "received"
    }
}
