// ABOUTME: Structured admin-page heuristic: classed count elements, chart bars, and post rows.
// ABOUTME: The broadest strategy; the only one that reads the weekly series and the post list.

//! Structured-page heuristic.
//!
//! Newer admin pages render visitor counts in elements whose class names hint
//! at visitor/count/stat semantics, a bar chart for the weekly series, and a
//! ranked post list. None of it is stable markup, so everything here is
//! best-effort: an element that fails to yield a number or a keyword is simply
//! not a match.

use scraper::{ElementRef, Html, Selector};

use crate::options::Options;
use crate::record::{PartialStats, TopPost};
use crate::strategies::{element_text, Strategy};
use crate::text::{digits_value, first_number, squeeze_whitespace, truncate_chars};

/// Elements whose class hints at a visitor/count/stat figure.
const COUNT_SELECTOR: &str = r#"[class*="visitor"], [class*="count"], [class*="stat"]"#;

/// Bars inside a chart-like container.
const CHART_BAR_SELECTOR: &str = r#"[class*="chart"] [class*="bar"]"#;

/// Post/article/row-like elements carrying the ranked post list.
const POST_SELECTOR: &str = r#"[class*="post"], [class*="article"], tr[class*="row"]"#;

/// Title element nested inside a post element.
const POST_TITLE_SELECTOR: &str = r#"[class*="title"], a, .subject"#;

/// View-count element nested inside a post element.
const POST_VIEWS_SELECTOR: &str = r#"[class*="view"], [class*="count"], .hit"#;

/// Attributes a chart bar may carry its value in, tried in order.
const BAR_VALUE_ATTRS: &[&str] = &["data-value", "aria-label", "title"];

const TODAY_KEYWORDS: &[&str] = &["오늘", "today"];
const YESTERDAY_KEYWORDS: &[&str] = &["어제", "yesterday"];
const TOTAL_KEYWORDS: &[&str] = &["전체", "total", "누적"];

/// A weekly series is only meaningful with one bar per day.
const WEEKLY_SERIES_LEN: usize = 7;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Structured admin-page heuristic (strategy 1 of 3).
#[derive(Debug, Clone)]
pub struct AdminPageStrategy {
    max_posts: usize,
    title_max_chars: usize,
}

impl AdminPageStrategy {
    pub fn new(opts: &Options) -> Self {
        Self {
            max_posts: opts.max_posts,
            title_max_chars: opts.title_max_chars,
        }
    }

    /// Reads one numeric value per chart bar and emits the series only when
    /// exactly seven bars yield values.
    ///
    /// Bars without a readable value are skipped; a chart with any other bar
    /// count is reported absent rather than resampled or padded.
    fn weekly_series(&self, doc: &Html) -> Option<Vec<u64>> {
        let sel = Selector::parse(CHART_BAR_SELECTOR).ok()?;
        let mut values = Vec::new();
        for bar in doc.select(&sel) {
            if let Some(value) = bar_value(&bar) {
                values.push(value);
            }
        }
        if values.len() == WEEKLY_SERIES_LEN {
            Some(values)
        } else {
            None
        }
    }

    /// Collects the ranked post list, capped at the first `max_posts`
    /// post-like elements in document order.
    fn top_posts(&self, doc: &Html) -> Vec<TopPost> {
        let Ok(post_sel) = Selector::parse(POST_SELECTOR) else {
            return Vec::new();
        };
        let Ok(title_sel) = Selector::parse(POST_TITLE_SELECTOR) else {
            return Vec::new();
        };
        let Ok(views_sel) = Selector::parse(POST_VIEWS_SELECTOR) else {
            return Vec::new();
        };

        let mut posts = Vec::new();
        for el in doc.select(&post_sel) {
            if posts.len() >= self.max_posts {
                break;
            }
            // Only elements with a nested title become entries.
            let Some(title_el) = el.select(&title_sel).next() else {
                continue;
            };
            let raw = squeeze_whitespace(&element_text(&title_el));
            let title = if raw.is_empty() {
                // Untitled rows keep their rank, as the original page labels them.
                format!("게시글 {}", posts.len() + 1)
            } else {
                truncate_chars(&raw, self.title_max_chars)
            };
            let views = el
                .select(&views_sel)
                .next()
                .map(|v| digits_value(&element_text(&v)))
                .unwrap_or(0);
            posts.push(TopPost { title, views });
        }
        posts
    }
}

/// Reads a bar's numeric value from its value-carrying attributes, falling
/// back to the bar text.
fn bar_value(bar: &ElementRef) -> Option<u64> {
    for attr in BAR_VALUE_ATTRS {
        if let Some(value) = bar.value().attr(attr).and_then(first_number) {
            return Some(value);
        }
    }
    first_number(&element_text(bar))
}

impl Strategy for AdminPageStrategy {
    fn name(&self) -> &'static str {
        "admin-page"
    }

    fn extract(&self, doc: &Html) -> Option<PartialStats> {
        let mut partial = PartialStats::default();

        if let Ok(sel) = Selector::parse(COUNT_SELECTOR) {
            for el in doc.select(&sel) {
                let text = element_text(&el);
                let Some(num) = first_number(&text) else {
                    continue;
                };
                // Last matching element wins for each field.
                if contains_any(&text, TODAY_KEYWORDS) {
                    partial.today = Some(num);
                } else if contains_any(&text, YESTERDAY_KEYWORDS) {
                    partial.yesterday = Some(num);
                } else if contains_any(&text, TOTAL_KEYWORDS) {
                    partial.total = Some(num);
                }
            }
        }

        if let Some(series) = self.weekly_series(doc) {
            partial.weekly_series = Some(series);
        }

        let posts = self.top_posts(doc);
        if !posts.is_empty() {
            partial.top_posts = Some(posts);
        }

        if partial.is_empty() {
            None
        } else {
            Some(partial)
        }
    }
}
