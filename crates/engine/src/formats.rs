// ABOUTME: Pure presentation helpers: localized number formatting and the text summary view.
// ABOUTME: Renders a StatsRecord to text the way the popup grid does, without any UI state.

//! Presentation formatting.
//!
//! Pure functions from a record to display text. The popup's rendering rules
//! are kept: counts compact to `만`/`k` units past 10,000/1,000, the
//! day-over-day change only shows when both days have data, and the post list
//! shows the top five entries.

use crate::record::StatsRecord;

/// How many posts the summary view shows.
const SUMMARY_POST_LIMIT: usize = 5;

/// Formats a count the way the popup grid does.
///
/// `>= 10000` renders in units of 10,000 (`12.0만`), `>= 1000` in thousands
/// (`3.4k`), anything smaller comma-grouped.
pub fn format_number(n: u64) -> String {
    if n >= 10_000 {
        format!("{:.1}만", n as f64 / 10_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        group_thousands(n)
    }
}

/// Day-over-day change as `▲ 12.5%` / `▼ 3.0%`.
///
/// Returns `None` when either day is 0 (no baseline) or the rounded change is
/// flat, matching the popup's "show nothing" behavior.
pub fn format_change(today: u64, yesterday: u64) -> Option<String> {
    if today == 0 || yesterday == 0 {
        return None;
    }
    let change = (today as f64 - yesterday as f64) / yesterday as f64 * 100.0;
    // One decimal place, like the popup.
    let rounded = (change * 10.0).round() / 10.0;
    if rounded > 0.0 {
        Some(format!("▲ {:.1}%", rounded))
    } else if rounded < 0.0 {
        Some(format!("▼ {:.1}%", rounded.abs()))
    } else {
        None
    }
}

/// Renders the record as a multi-line text summary.
///
/// A pure view: the same record always renders the same text. Sections with
/// no data (weekly series, posts) are omitted entirely.
pub fn format_summary(record: &StatsRecord) -> String {
    let mut lines = Vec::new();

    let mut today_line = format!("today      {}", format_number(record.today));
    if let Some(change) = format_change(record.today, record.yesterday) {
        today_line.push_str(&format!("  ({})", change));
    }
    lines.push(today_line);
    lines.push(format!("yesterday  {}", format_number(record.yesterday)));
    lines.push(format!("week       {}", format_number(record.week)));
    lines.push(format!("month      {}", format_number(record.month)));
    lines.push(format!("total      {}", format_number(record.total)));

    if !record.weekly_series.is_empty() {
        let series = record
            .weekly_series
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("weekly     {}", series));
    }

    if !record.top_posts.is_empty() {
        lines.push("top posts".to_string());
        for (rank, post) in record.top_posts.iter().take(SUMMARY_POST_LIMIT).enumerate() {
            lines.push(format!(
                "  {}. {} ({})",
                rank + 1,
                post.title,
                format_number(post.views)
            ));
        }
    }

    lines.join("\n")
}

/// Comma-groups a count: 1234567 → "1,234,567".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
