//! Plain-text rendering for the CLI.

use crate::analysis::AnalysisReport;
use crate::models::{Extremes, Message, PartnerCount, ScoreVector, ScoredMessage, TableSchema};

const BAR_WIDTH: usize = 20;

pub fn tables(tables: &[TableSchema]) -> String {
    let mut out = String::new();
    for table in tables {
        out.push_str(&format!("== {} ==\n{}\n\n", table.name, table.pretty_sql()));
    }
    out
}

pub fn messages(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&format!(
            "{} {} {}: {}\n",
            message.timestamp.format("%Y-%m-%d %H:%M:%S"),
            direction_arrow(message.is_from_me),
            message.partner_id,
            message.text.as_deref().unwrap_or("")
        ));
    }
    out
}

pub fn partner_counts(counts: &[PartnerCount]) -> String {
    let width = counts.iter().map(|c| c.partner_id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for count in counts {
        out.push_str(&format!(
            "{:<width$}  {:>6}\n",
            count.partner_id, count.count
        ));
    }
    out
}

pub fn score(score: &ScoreVector) -> String {
    format!("{score}\n")
}

pub fn report(report: &AnalysisReport) -> String {
    let mut out = format!("Scored {} messages\n\n", report.total_messages);

    out.push_str("## Most extreme messages\n\n");
    out.push_str(&extremes("sent", report.sent_extremes.as_ref()));
    out.push_str(&extremes("received", report.received_extremes.as_ref()));

    out.push_str("## Average compound per partner\n\n");
    let width = report.partner_means.keys().map(String::len).max().unwrap_or(0);
    for (partner, mean) in &report.partner_means {
        out.push_str(&format!("{partner:<width$}  {mean:>7.4}  {}\n", bar(*mean)));
    }

    let gaps = report.widest_gaps();
    if !gaps.is_empty() {
        out.push_str("\n## Sent minus received\n\n");
        for (partner, gap) in gaps {
            out.push_str(&format!("{partner:<width$}  {gap:>+7.4}\n"));
        }
    }

    if !report.weekdays.is_empty() {
        out.push_str("\n## Average compound per weekday\n\n");
        for day in &report.weekdays {
            out.push_str(&format!(
                "{:<3}  {:>7.4}  {:>6} messages\n",
                day.weekday, day.mean_compound, day.count
            ));
        }
    }

    if !report.months.is_empty() {
        out.push_str("\n## Average compound per month\n\n");
        for month in &report.months {
            out.push_str(&format!(
                "{}  {:>7.4}  {:>6} messages  {}\n",
                month.label(),
                month.mean_compound,
                month.count,
                bar(month.mean_compound)
            ));
        }
    }

    out
}

fn extremes(label: &str, extremes: Option<&Extremes>) -> String {
    match extremes {
        Some(extremes) => format!(
            "Most positive {label}: {}\nMost negative {label}: {}\n\n",
            scored_line(&extremes.most_positive),
            scored_line(&extremes.most_negative)
        ),
        None => format!("No {label} messages\n\n"),
    }
}

fn scored_line(message: &ScoredMessage) -> String {
    format!(
        "[{:+.4}] {} {}: {}",
        message.compound(),
        message.message.timestamp.format("%Y-%m-%d %H:%M"),
        message.partner_id(),
        message.message.text.as_deref().unwrap_or("")
    )
}

fn direction_arrow(is_from_me: bool) -> &'static str {
    if is_from_me {
        "->"
    } else {
        "<-"
    }
}

/// Horizontal bar for a value in `[-1, 1]`, `+` for positive and `-` for negative.
fn bar(value: f64) -> String {
    let len = (value.abs().min(1.0) * BAR_WIDTH as f64).round() as usize;
    let symbol = if value < 0.0 { "-" } else { "+" };
    symbol.repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bar_scales_with_magnitude() {
        assert_eq!(bar(1.0), "+".repeat(BAR_WIDTH));
        assert_eq!(bar(-0.5), "-".repeat(BAR_WIDTH / 2));
        assert_eq!(bar(0.0), "");
    }

    #[test]
    fn test_messages_show_direction() {
        let ts = NaiveDate::from_ymd_opt(2022, 3, 4)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        let rendered = messages(&[
            Message::new(Some("hey".to_string()), true, "+15550100", ts),
            Message::new(None, false, "+15550100", ts),
        ]);

        assert_eq!(
            rendered,
            "2022-03-04 09:05:00 -> +15550100: hey\n2022-03-04 09:05:00 <- +15550100: \n"
        );
    }

    #[test]
    fn test_partner_counts_aligned() {
        let rendered = partner_counts(&[
            PartnerCount {
                partner_id: "sam@example.com".to_string(),
                count: 12,
            },
            PartnerCount {
                partner_id: "+15550100".to_string(),
                count: 3,
            },
        ]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], format!("sam@example.com{}12", " ".repeat(6)));
        assert_eq!(lines[1], format!("+15550100{}3", " ".repeat(13)));
    }
}
