// ABOUTME: The extraction engine facade: runs the ordered strategies and reconciles their output.
// ABOUTME: One synchronous DOM-read-and-parse pass per request; no state survives between runs.

//! Extraction engine.
//!
//! The engine runs the three strategies in a fixed order (admin page, legacy
//! tables, counter widgets), each against the same document snapshot, and
//! merges their partial outputs with field-level overwrite: a later
//! strategy's populated field replaces an earlier one's, while a strategy
//! that contributed nothing erases nothing. The widget strategy's
//! `today`/`total` therefore take precedence over the admin strategy's when
//! both fire; that ordering is preserved from the original extractor for
//! compatibility and carries no accuracy claim.

use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use scraper::Html;

use crate::options::{EngineBuilder, Options};
use crate::record::{PartialStats, StatsRecord};
use crate::strategies::{default_strategies, Strategy};

/// The stats extraction engine.
///
/// Construct via [`Engine::builder`]. An engine is reusable: each call to
/// [`extract`](Engine::extract) builds a fresh record and shares nothing with
/// previous runs.
pub struct Engine {
    opts: Options,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Engine {
    /// Create a new EngineBuilder for configuring the engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Create a new Engine with the given options and the default strategy
    /// order.
    pub fn new(opts: Options) -> Self {
        let strategies = default_strategies(&opts);
        Self { opts, strategies }
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Runs every strategy against the document and reconciles the partial
    /// results into one record.
    ///
    /// The extraction timestamp is taken once, before any strategy runs. A
    /// strategy that panics is treated as having contributed nothing; the
    /// remaining strategies still run.
    pub fn extract(&self, doc: &Html) -> StatsRecord {
        let extracted_at = Utc::now();

        let mut merged = PartialStats::default();
        for strategy in &self.strategies {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.extract(doc)));
            if let Ok(Some(partial)) = outcome {
                merged.apply(partial);
            }
        }

        merged.into_record(extracted_at)
    }

    /// Parses an HTML string and extracts from it.
    pub fn extract_html(&self, html: &str) -> StatsRecord {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PartialStats;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_all_defaults() {
        let engine = Engine::default();
        let record = engine.extract_html("<html><body><p>본문</p></body></html>");
        assert!(record.is_all_default());
    }

    #[test]
    fn later_strategy_overwrites_earlier_field() {
        // Admin sees today=5 in the classed stat element; the widget strategy
        // sees today=9 in the counter element and runs later.
        let html = r#"
            <p class="stat">오늘 5</p>
            <div>오늘 <em class="cnt">9</em></div>
        "#;
        let record = Engine::default().extract_html(html);
        assert_eq!(record.today, 9);
    }

    #[test]
    fn no_contribution_never_erases() {
        // Admin sets total=100; no tables and no counters exist, so the later
        // strategies contribute nothing.
        let html = r#"<span class="stat">전체 100</span>"#;
        let record = Engine::default().extract_html(html);
        assert_eq!(record.total, 100);
    }

    #[test]
    fn panicking_strategy_degrades_to_no_contribution() {
        struct Panicky;
        impl Strategy for Panicky {
            fn name(&self) -> &'static str {
                "panicky"
            }
            fn extract(&self, _doc: &Html) -> Option<PartialStats> {
                panic!("structural surprise");
            }
        }
        struct Fixed;
        impl Strategy for Fixed {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn extract(&self, _doc: &Html) -> Option<PartialStats> {
                Some(PartialStats {
                    today: Some(7),
                    ..Default::default()
                })
            }
        }

        let engine = Engine {
            opts: Options::default(),
            strategies: vec![Box::new(Panicky), Box::new(Fixed)],
        };
        let record = engine.extract_html("<p></p>");
        assert_eq!(record.today, 7);
    }

    #[test]
    fn options_thread_through_to_strategies() {
        let items: String = (1..=6)
            .map(|i| format!(r#"<div class="post"><a>글 {}</a></div>"#, i))
            .collect();
        let engine = Engine::builder().max_posts(4).build();
        let record = engine.extract_html(&items);
        assert_eq!(record.top_posts.len(), 4);
    }

    #[test]
    fn each_run_builds_a_fresh_record() {
        let engine = Engine::default();
        let first = engine.extract_html(r#"<p class="stat">오늘 5</p>"#);
        let second = engine.extract_html("<p>nothing here</p>");
        assert_eq!(first.today, 5);
        assert_eq!(second.today, 0);
    }
}
