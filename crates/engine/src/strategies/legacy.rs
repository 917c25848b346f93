// ABOUTME: Tabular legacy-page heuristic: keyword cell followed by a numeric sibling cell.
// ABOUTME: Reads day/week/month/total counts only; never touches charts or posts.

//! Legacy-page heuristic.
//!
//! Older statistics pages lay visitor counts out as label/value pairs in
//! plain tables. For every cell whose text carries a period keyword, the next
//! cell in the same row supplies the value. A matched keyword with a
//! digitless neighbor still sets the field, to 0.

use scraper::{Html, Selector};

use crate::record::PartialStats;
use crate::strategies::{element_text, Strategy};
use crate::text::digits_value;

const TODAY_KEYWORDS: &[&str] = &["오늘"];
const YESTERDAY_KEYWORDS: &[&str] = &["어제"];
const WEEK_KEYWORDS: &[&str] = &["주간", "이번 주"];
const MONTH_KEYWORDS: &[&str] = &["월간", "이번 달"];
const TOTAL_KEYWORDS: &[&str] = &["전체", "누적"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Tabular legacy-page heuristic (strategy 2 of 3).
#[derive(Debug, Clone, Default)]
pub struct LegacyTableStrategy;

impl LegacyTableStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for LegacyTableStrategy {
    fn name(&self) -> &'static str {
        "legacy-table"
    }

    fn extract(&self, doc: &Html) -> Option<PartialStats> {
        let table_sel = Selector::parse("table").ok()?;
        let row_sel = Selector::parse("tr").ok()?;
        let cell_sel = Selector::parse("td, th").ok()?;

        let mut partial = PartialStats::default();
        for table in doc.select(&table_sel) {
            for row in table.select(&row_sel) {
                let cells: Vec<_> = row.select(&cell_sel).collect();
                for pair in cells.windows(2) {
                    let label = element_text(&pair[0]);
                    let value = digits_value(&element_text(&pair[1]));
                    // Keyword tests are independent: one label cell can set
                    // several fields, and later rows overwrite earlier ones.
                    if contains_any(&label, TODAY_KEYWORDS) {
                        partial.today = Some(value);
                    }
                    if contains_any(&label, YESTERDAY_KEYWORDS) {
                        partial.yesterday = Some(value);
                    }
                    if contains_any(&label, WEEK_KEYWORDS) {
                        partial.week = Some(value);
                    }
                    if contains_any(&label, MONTH_KEYWORDS) {
                        partial.month = Some(value);
                    }
                    if contains_any(&label, TOTAL_KEYWORDS) {
                        partial.total = Some(value);
                    }
                }
            }
        }

        if partial.is_empty() {
            None
        } else {
            Some(partial)
        }
    }
}
