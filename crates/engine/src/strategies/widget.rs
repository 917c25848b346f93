// ABOUTME: Counter-widget heuristic: sidebar visitor counters classified by their parent's text.
// ABOUTME: The narrowest strategy; only reads today and total.

//! Widget heuristic.
//!
//! Blog sidebars often carry a small visitor counter: a bare number whose
//! meaning is only visible in the surrounding markup. The element's own text
//! supplies the number; the parent element's text supplies the context.
//!
//! The keyword set here is independent from the admin-page strategy's and
//! matches the English keywords case-insensitively, since counter skins
//! render them as TODAY/TOTAL labels.

use scraper::{ElementRef, Html, Selector};

use crate::record::PartialStats;
use crate::strategies::{element_text, Strategy};
use crate::text::first_number;

/// Elements whose class hints at a counter widget.
const COUNTER_SELECTOR: &str = r#"[class*="counter"], [class*="visitor"], .blog_count, .cnt"#;

const TODAY_CONTEXT: &[&str] = &["오늘", "TODAY"];
const TOTAL_CONTEXT: &[&str] = &["전체", "TOTAL"];

fn context_matches(parent_text: &str, keywords: &[&str]) -> bool {
    let upper = parent_text.to_uppercase();
    keywords.iter().any(|kw| upper.contains(kw))
}

/// Counter-widget heuristic (strategy 3 of 3).
#[derive(Debug, Clone, Default)]
pub struct WidgetCounterStrategy;

impl WidgetCounterStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for WidgetCounterStrategy {
    fn name(&self) -> &'static str {
        "widget-counter"
    }

    fn extract(&self, doc: &Html) -> Option<PartialStats> {
        let sel = Selector::parse(COUNTER_SELECTOR).ok()?;

        let mut partial = PartialStats::default();
        for el in doc.select(&sel) {
            let Some(num) = first_number(&element_text(&el)) else {
                continue;
            };
            let parent_text = el
                .parent()
                .and_then(ElementRef::wrap)
                .map(|p| element_text(&p))
                .unwrap_or_default();

            if context_matches(&parent_text, TODAY_CONTEXT) {
                partial.today = Some(num);
            } else if context_matches(&parent_text, TOTAL_CONTEXT) {
                partial.total = Some(num);
            }
        }

        if partial.is_empty() {
            None
        } else {
            Some(partial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(html: &str) -> Option<PartialStats> {
        let doc = Html::parse_document(html);
        WidgetCounterStrategy::new().extract(&doc)
    }

    #[test]
    fn classifies_by_parent_context() {
        let partial = extract(
            r#"<div><span>오늘</span><em class="cnt">1,024</em></div>
               <div><span>전체</span><em class="blog_count">99,000</em></div>"#,
        )
        .unwrap();
        assert_eq!(partial.today, Some(1024));
        assert_eq!(partial.total, Some(99000));
    }

    #[test]
    fn english_context_is_case_insensitive() {
        let partial = extract(r#"<div>Today<span class="counter">88</span></div>"#).unwrap();
        assert_eq!(partial.today, Some(88));
    }

    #[test]
    fn counter_without_context_is_not_a_match() {
        assert!(extract(r#"<div>방문<span class="cnt">7</span></div>"#).is_none());
    }

    #[test]
    fn counter_without_number_is_not_a_match() {
        assert!(extract(r#"<div>오늘<span class="cnt">집계중</span></div>"#).is_none());
    }

    #[test]
    fn later_counters_overwrite_earlier_ones() {
        let partial = extract(
            r#"<div>오늘 <span class="cnt">5</span></div>
               <div>오늘 <span class="counter">9</span></div>"#,
        )
        .unwrap();
        assert_eq!(partial.today, Some(9));
    }

    #[test]
    fn today_context_wins_over_total_in_same_parent() {
        let partial = extract(r#"<div>오늘/전체 <span class="cnt">3</span></div>"#).unwrap();
        assert_eq!(partial.today, Some(3));
        assert_eq!(partial.total, None);
    }
}
